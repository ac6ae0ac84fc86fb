//! Blockchain category breakdown.

use folio_display::{
    categories::category_slices,
    format::{format_roi, format_tokens_received},
    number::to_fixed,
};
use folio_types::{BlockchainCategory, PortfolioSnapshot};

use super::{
    charts::donut_chart,
    widgets::{section, simple_table},
};

const HEADERS: [&str; 9] = [
    "Category",
    "Total Invested",
    "Share",
    "Total Value",
    "Realised Value",
    "Realised P&L",
    "ROI",
    "Realised ROI",
    "Investments",
];

fn category_row(category: &BlockchainCategory, share: Option<f64>) -> Vec<String> {
    let investments = if category.investments.is_empty() {
        category
            .investment_count
            .map_or_else(|| "-".to_owned(), |n| n.to_string())
    } else {
        category.investments.join(", ")
    };
    vec![
        category.category.clone(),
        format_tokens_received(&category.total_invested),
        share.map_or_else(|| "-".to_owned(), |share| format!("{}%", to_fixed(share, 1))),
        format_tokens_received(&category.total_value),
        format_tokens_received(&category.realised_value),
        format_tokens_received(&category.realised_pnl),
        format_roi(&category.roi),
        format_roi(&category.realised_roi),
        investments,
    ]
}

pub fn analytics_view(snapshot: &PortfolioSnapshot) -> String {
    let categories = snapshot.blockchain_categories.as_slice();
    let slices = category_slices(categories);

    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(|category| {
            let share = slices
                .iter()
                .find(|slice| std::ptr::eq(slice.category, category))
                .map(|slice| slice.share);
            category_row(category, share)
        })
        .collect();

    let mut body = section("Invested by Category", &donut_chart(&slices));
    body.push_str(&section("Categories", &simple_table(&HEADERS, &rows)));
    body
}
