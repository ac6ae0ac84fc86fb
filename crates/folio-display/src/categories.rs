//! Chart data for the blockchain-category views.

use std::cmp::Ordering;

use folio_types::BlockchainCategory;

use crate::number::parse_float_prefix;

/// Multiples above this are assumed to be percentages and scaled down.
const PERCENT_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct CategoryBar<'a> {
    pub category: &'a BlockchainCategory,
    pub invested: f64,
    pub invested_share: f64,
    pub realised_roi: f64,
    pub unrealised_roi: f64,
}

impl CategoryBar<'_> {
    pub fn total_roi(&self) -> f64 {
        self.realised_roi + self.unrealised_roi
    }
}

/// One donut segment. `share` is the percentage of the summed invested amount.
#[derive(Debug, Clone, Copy)]
pub struct CategorySlice<'a> {
    pub category: &'a BlockchainCategory,
    pub invested: f64,
    pub share: f64,
}

fn invested(category: &BlockchainCategory) -> f64 {
    let cleaned: String = category
        .total_invested
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    parse_float_prefix(&cleaned).unwrap_or(0.0)
}

/// Reads a category multiple such as `"1.8x"`, `"12 %"` or `"-"`.
pub fn category_roi(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, 'x' | 'X' | '%') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() || cleaned == "0" || cleaned == "-" {
        return 0.0;
    }
    match parse_float_prefix(&cleaned) {
        Some(roi) if roi > PERCENT_THRESHOLD => roi / 100.0,
        Some(roi) => roi,
        None => 0.0,
    }
}

fn total_invested(categories: &[BlockchainCategory]) -> f64 {
    categories.iter().map(invested).sum()
}

/// Bars for the performance chart: categories with money in them, best
/// combined multiple first.
pub fn category_bars(categories: &[BlockchainCategory]) -> Vec<CategoryBar<'_>> {
    let total = total_invested(categories);
    let mut bars: Vec<_> = categories
        .iter()
        .map(|category| {
            let invested = invested(category);
            CategoryBar {
                category,
                invested,
                invested_share: if total > 0.0 {
                    invested / total * 100.0
                } else {
                    0.0
                },
                realised_roi: category_roi(&category.realised_roi),
                unrealised_roi: category_roi(&category.unrealised_roi),
            }
        })
        .filter(|bar| bar.invested > 0.0)
        .collect();
    bars.sort_by(|a, b| {
        b.total_roi()
            .partial_cmp(&a.total_roi())
            .unwrap_or(Ordering::Equal)
    });
    bars
}

/// Upper bound of the bar chart axis, never below `1x`.
pub fn max_roi(bars: &[CategoryBar<'_>]) -> f64 {
    bars.iter()
        .flat_map(|bar| [bar.realised_roi, bar.unrealised_roi])
        .fold(1.0, f64::max)
}

/// Donut segments in sheet order.
pub fn category_slices(categories: &[BlockchainCategory]) -> Vec<CategorySlice<'_>> {
    let total = total_invested(categories);
    categories
        .iter()
        .map(|category| (category, invested(category)))
        .filter(|(_, invested)| *invested > 0.0)
        .map(|(category, invested)| CategorySlice {
            category,
            invested,
            share: invested / total * 100.0,
        })
        .collect()
}
