//! Stacked-bar data for the token unlock schedule.

use folio_types::VestingMonth;

use crate::format::format_month;

#[derive(Debug, Clone, PartialEq)]
pub struct VestingBar {
    /// Display label, e.g. `Mar 2025`.
    pub label: String,
    /// `(project, amount)` segments in project order, zero amounts left out.
    pub segments: Vec<(String, f64)>,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VestingSeries {
    /// Every project seen in the schedule, in first-seen order.
    pub projects: Vec<String>,
    pub bars: Vec<VestingBar>,
    pub max_total: f64,
}

impl VestingSeries {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Index of `project` in [`Self::projects`], used to pick a stable colour.
    pub fn project_index(&self, project: &str) -> Option<usize> {
        self.projects.iter().position(|name| name == project)
    }
}

pub fn vesting_series(months: &[VestingMonth]) -> VestingSeries {
    let mut projects: Vec<String> = Vec::new();
    for month in months {
        for (project, _) in &month.amounts {
            if !projects.contains(project) {
                projects.push(project.clone());
            }
        }
    }

    let bars: Vec<VestingBar> = months
        .iter()
        .filter_map(|month| {
            let segments: Vec<(String, f64)> = projects
                .iter()
                .map(|project| (project.clone(), month.amount(project)))
                .filter(|(_, amount)| *amount > 0.0)
                .collect();
            let total: f64 = segments.iter().map(|(_, amount)| amount).sum();
            (total > 0.0).then(|| VestingBar {
                label: format_month(&month.month),
                segments,
                total,
            })
        })
        .collect();

    let max_total = bars.iter().map(|bar| bar.total).fold(0.0, f64::max);
    VestingSeries {
        projects,
        bars,
        max_total,
    }
}
