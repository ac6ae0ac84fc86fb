//! Whole-fund view.

use folio_display::{
    SortState, UnlockKind,
    categories::category_bars,
    cells::fund_cell,
    format::{
        format_currency_thousands, format_percentage, format_roi, format_tokens_received,
        format_tokens_roi, format_unlock_column,
    },
    number::parse_loose,
    rankings::{liquid_summary, top_biggest, top_liquid, top_realised},
    sort::FUND_COLUMNS,
    vesting::vesting_series,
};
use folio_types::{ListedProjects, Overview, PortfolioSnapshot};

use super::{
    View,
    charts::{category_chart, vesting_chart},
    escape_html,
    tables::{ranked_table, sortable_table},
    widgets::{card_grid, section, simple_table, stat_card},
};

const TOP_LIQUID: usize = 5;
const TOP_POSITIONS: usize = 5;

fn count(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_owned(), |n| n.to_string())
}

fn overview_cards(overview: &Overview) -> String {
    let split = format!(
        "{} listed / {} not listed",
        count(overview.listed_count),
        count(overview.non_listed_count)
    );
    card_grid(&[
        stat_card("Total Invested", &format_tokens_received(&overview.total_invested), None),
        stat_card("Total Value", &format_tokens_received(&overview.total_value), None),
        stat_card("Realised Value", &format_tokens_received(&overview.realised_value), None),
        stat_card(
            "Unrealised Value",
            &format_tokens_received(&overview.unrealised_value),
            None,
        ),
        stat_card("Realised P&L", &format_tokens_received(&overview.realised_pnl), None),
        stat_card(
            "Unrealised P&L",
            &format_tokens_received(&overview.unrealised_pnl),
            None,
        ),
        stat_card("ROI", &format_roi(&overview.roi), None),
        stat_card("Realised ROI", &format_roi(&overview.realised_roi), None),
        stat_card("Liquid Value", &format_tokens_received(&overview.liquid_value), None),
        stat_card("% Received", &format_percentage(&overview.percent_received), None),
        stat_card("% Sold", &format_percentage(&overview.percent_sold), None),
        stat_card("Investments", &count(overview.investments_count), Some(&split)),
        stat_card(
            "Tokens Received",
            &format_tokens_received(&overview.tokens_received),
            Some(&format_percentage(&overview.tokens_received_percentage)),
        ),
    ])
}

fn listed_block(listed: &ListedProjects) -> String {
    let next_unlock = format_unlock_column(&listed.next_unlock_amount, UnlockKind::Currency);
    let next_note = [
        listed.next_unlock_project.as_str(),
        listed.next_unlock_days_detailed.as_str(),
    ]
    .iter()
    .filter(|part| !part.trim().is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" • ");

    card_grid(&[
        stat_card(
            "Listed Invested",
            &format_currency_thousands(&listed.total_invested),
            Some(&format_percentage(&listed.total_invested_percentage)),
        ),
        stat_card(
            "Listed Value",
            &format_currency_thousands(&listed.total_value),
            Some(&format_percentage(&listed.total_value_percentage)),
        ),
        stat_card("Next Unlock", &next_unlock, Some(&next_note)),
        stat_card(
            "Tokens Received",
            &format_tokens_received(&listed.tokens_received),
            Some(&format_percentage(&listed.tokens_received_percentage)),
        ),
        stat_card("Tokens ROI", &format_tokens_roi(&listed.tokens_received_roi), None),
    ])
}

pub fn fund_view(snapshot: &PortfolioSnapshot, sort: SortState) -> String {
    let investments = snapshot.investments.as_slice();
    let mut body = String::new();

    if let Some(overview) = &snapshot.overview {
        body.push_str(&section("Overview", &overview_cards(overview)));
    }
    if let Some(listed) = &snapshot.listed_projects {
        body.push_str(&section("Listed Projects", &listed_block(listed)));
    }

    let liquid = liquid_summary(&top_liquid(investments, TOP_LIQUID), |inv| {
        inv.name.as_str()
    });
    body.push_str(&section(
        "Top Liquid Positions",
        &format!(r#"<div class="card">{}</div>"#, escape_html(&liquid)),
    ));

    let overview = snapshot.overview.as_ref();
    let total_value = overview
        .and_then(|overview| parse_loose(&overview.total_value))
        .unwrap_or(0.0);
    let realised_value = overview
        .and_then(|overview| parse_loose(&overview.realised_value))
        .unwrap_or(0.0);
    body.push_str(&section(
        "Biggest Positions",
        &ranked_table(
            &top_biggest(investments, TOP_POSITIONS),
            |inv| inv.name.as_str(),
            total_value,
            "Total Value",
        ),
    ));
    body.push_str(&section(
        "Top Realised",
        &ranked_table(
            &top_realised(investments, TOP_POSITIONS),
            |inv| inv.name.as_str(),
            realised_value,
            "Realised Value",
        ),
    ));

    body.push_str(&section(
        "Vesting Schedule",
        &vesting_chart(&vesting_series(&snapshot.vesting_chart)),
    ));
    body.push_str(&section(
        "Category Performance",
        &category_chart(&category_bars(&snapshot.blockchain_categories)),
    ));
    body.push_str(&section(
        "Investments",
        &sortable_table(
            &View::Fund,
            investments.iter().collect(),
            FUND_COLUMNS,
            sort,
            fund_cell,
        ),
    ));

    body
}

#[cfg(test)]
mod tests {
    use folio_types::{Investment, VestingMonth};

    use super::*;

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            overview: Some(Overview {
                total_value: "$200,000".to_owned(),
                realised_value: "$10,000".to_owned(),
                roi: "1.456x".to_owned(),
                investments_count: Some(2),
                listed_count: Some(1),
                non_listed_count: Some(1),
                ..Overview::default()
            }),
            investments: vec![
                Investment {
                    name: "Hatom".to_owned(),
                    total_value: "$150,000".to_owned(),
                    liquid_value: "$12,000.75".to_owned(),
                    realised_value: "$10,000".to_owned(),
                    ..Investment::default()
                },
                Investment {
                    name: "Peaq".to_owned(),
                    total_value: "$50,000".to_owned(),
                    ..Investment::default()
                },
            ],
            vesting_chart: vec![VestingMonth::new("2025-06").with_amount("Hatom", 400.0)],
            ..PortfolioSnapshot::default()
        }
    }

    #[test]
    fn test_fund_view_sections() {
        let html = fund_view(&snapshot(), SortState::default());

        assert!(html.contains("1.46x"));
        assert!(html.contains("1 listed / 1 not listed"));
        assert!(html.contains("Hatom: $12,000"));
        assert!(html.contains("<td>Hatom</td><td>$150,000</td><td>75.0%</td>"));
        assert!(html.contains("<td>Hatom</td><td>$10,000</td><td>100.0%</td>"));
        assert!(html.contains("<td>Top 2</td><td>$200,000</td><td>100.0%</td>"));
        assert!(html.contains("Jun 2025"));
        assert!(html.contains("No category data"));
        assert!(!html.contains("Listed Projects"));
    }

    #[test]
    fn test_empty_snapshot() {
        let html = fund_view(&PortfolioSnapshot::default(), SortState::default());
        assert!(html.contains("No liquid positions"));
        assert!(html.contains("No investments"));
        assert!(!html.contains("Overview"));
    }
}
