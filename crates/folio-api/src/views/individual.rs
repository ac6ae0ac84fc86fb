//! One manager's portfolio.

use folio_display::{
    DistributionCurrency, SortState,
    cells::individual_cell,
    composition::{Composition, composition, unrealised_pnl},
    distributions::{
        format_dpi, format_outstanding_total, format_owed, outstanding_by_holding,
        total_distributed,
    },
    format::{
        format_outstanding_distribution, format_percentage, format_roi, format_signed_dollars,
        format_tokens_received,
    },
    number::{floor_grouped, format_grouped, parse_loose, round_half_up, to_fixed},
    rankings::{
        liquid_summary, top_individual_biggest, top_individual_liquid, top_individual_realised,
    },
    sort::{INDIVIDUAL_COLUMNS, IndividualRow},
    vesting::vesting_series,
};
use folio_types::{IndividualPortfolio, PortfolioSnapshot, PortfolioSummary};

use super::{
    View,
    charts::vesting_chart,
    escape_html,
    tables::{ranked_table, sortable_table},
    widgets::{card_grid, empty_note, section, simple_table, stat_card},
};

const TOP_LIQUID: usize = 3;
const TOP_POSITIONS: usize = 5;

fn summary_cards(summary: &PortfolioSummary) -> String {
    card_grid(&[
        stat_card(
            "Total Invested",
            &format_tokens_received(&summary.total_invested),
            Some(&format!("{} of fund", format_percentage(&summary.share))),
        ),
        stat_card("Realised Value", &format_tokens_received(&summary.realised_value), None),
        stat_card("Total Value", &format_tokens_received(&summary.total_value), None),
        stat_card(
            "Unrealised Value",
            &format_tokens_received(&summary.unrealised_value),
            None,
        ),
        stat_card("Realised P&L", &format_tokens_received(&summary.realised_pnl), None),
        stat_card("Realised ROI", &format_roi(&summary.realised_roi), None),
        stat_card(
            "Unrealised P&L",
            &format_signed_dollars(unrealised_pnl(summary)),
            None,
        ),
        stat_card("Unrealised ROI", &format_roi(&summary.unrealised_roi), None),
        stat_card("Liquid Value", &format_tokens_received(&summary.liquid_value), None),
    ])
}

fn composition_block(composition: &Composition, summary: Option<&PortfolioSummary>) -> String {
    let mut cards = vec![
        stat_card("Investments", &composition.investments.to_string(), None),
        stat_card("Pre-TGE", &composition.pre_tge.to_string(), None),
        stat_card("Listed", &composition.listed.to_string(), None),
        stat_card(
            "Received from Total Invested",
            &format!("${}", floor_grouped(composition.received)),
            Some(&format!("{}%", to_fixed(composition.received_percentage(), 1))),
        ),
    ];
    if let Some(summary) = summary {
        cards.push(stat_card(
            "Return on Tokens Received",
            &format!("{}x", to_fixed(composition.return_on_received(summary), 2)),
            Some("Including sold and liquid tokens"),
        ));
    }
    card_grid(&cards)
}

fn outstanding_list(portfolio: &IndividualPortfolio, currency: DistributionCurrency) -> String {
    let owed = outstanding_by_holding(&portfolio.investments, currency);
    if owed.is_empty() {
        return empty_note("No significant outstanding amounts");
    }
    let rows: Vec<Vec<String>> = owed
        .iter()
        .map(|entry| vec![entry.name.to_owned(), format_owed(entry.amount, currency)])
        .collect();
    let label = currency.to_string();
    simple_table(&["Name", &label], &rows)
}

fn distributions_block(portfolio: &IndividualPortfolio, summary: &PortfolioSummary) -> String {
    let mut body = card_grid(&[
        stat_card(
            "DPI",
            &format_dpi(&summary.dpi),
            Some("Cash distributions relative to capital invested"),
        ),
        stat_card(
            "Total Distributed",
            &format!(
                "${}",
                format_grouped(round_half_up(total_distributed(&portfolio.investments)), 0, 0)
            ),
            Some("Total cash distributed to investors"),
        ),
        stat_card(
            "Withdrawn",
            &format_tokens_received(&summary.withdraw_usd),
            Some(&format!(
                "{} • {}",
                format_outstanding_distribution(&summary.withdraw_eth, DistributionCurrency::ETH),
                format_outstanding_distribution(&summary.withdraw_sol, DistributionCurrency::SOL),
            )),
        ),
    ]);

    for currency in DistributionCurrency::ALL {
        let total = match currency {
            DistributionCurrency::USDC => &summary.outstanding_usdc,
            DistributionCurrency::ETH => &summary.outstanding_eth,
            DistributionCurrency::SOL => &summary.outstanding_sol,
        };
        body.push_str(&format!(
            "<h3>Outstanding {}</h3>",
            escape_html(&format_outstanding_total(total, currency))
        ));
        body.push_str(&outstanding_list(portfolio, currency));
    }
    body
}

fn top_positions(portfolio: &IndividualPortfolio, summary: &PortfolioSummary) -> String {
    let realised_total = parse_loose(&summary.realised_value).unwrap_or(0.0);
    let value_total = parse_loose(&summary.total_value).unwrap_or(0.0);

    let mut body = section(
        "Top Realised",
        &ranked_table(
            &top_individual_realised(&portfolio.investments, TOP_POSITIONS),
            |inv| inv.name.as_str(),
            realised_total,
            "Realised Value",
        ),
    );
    body.push_str(&section(
        "Biggest Positions",
        &ranked_table(
            &top_individual_biggest(&portfolio.investments, TOP_POSITIONS),
            |inv| inv.name.as_str(),
            value_total,
            "Total Value",
        ),
    ));
    body
}

/// Body of the page for portfolio `key`.
pub fn individual_view(
    key: &str,
    portfolio: &IndividualPortfolio,
    snapshot: &PortfolioSnapshot,
    sort: SortState,
) -> String {
    let summary = portfolio.summary.as_ref();
    let mut body = String::new();

    if !portfolio.range.trim().is_empty() {
        body.push_str(&format!(
            r#"<p class="status">{}</p>"#,
            escape_html(&portfolio.range)
        ));
    }
    if let Some(summary) = summary {
        body.push_str(&section("Summary", &summary_cards(summary)));
    }
    let composition = composition(&portfolio.investments, &snapshot.investments);
    body.push_str(&section(
        "Composition",
        &composition_block(&composition, summary),
    ));

    let liquid = liquid_summary(
        &top_individual_liquid(&portfolio.investments, TOP_LIQUID),
        |inv| inv.name.as_str(),
    );
    body.push_str(&section(
        "Top Liquid Positions",
        &format!(r#"<div class="card">{}</div>"#, escape_html(&liquid)),
    ));

    if let Some(summary) = summary {
        body.push_str(&top_positions(portfolio, summary));
        body.push_str(&section(
            "Distributions to Investors",
            &distributions_block(portfolio, summary),
        ));
    }

    body.push_str(&section(
        "Vesting Schedule",
        &vesting_chart(&vesting_series(snapshot.vesting_for(key))),
    ));
    body.push_str(&section(
        "Investments",
        &sortable_table(
            &View::Portfolio(key.to_owned()),
            IndividualRow::join(&portfolio.investments, &snapshot.investments),
            INDIVIDUAL_COLUMNS,
            sort,
            individual_cell,
        ),
    ));

    body
}
