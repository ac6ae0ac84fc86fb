//! Top-N lists shown above the tables.

use std::cmp::Ordering;

use folio_types::{IndividualInvestment, Investment};

use crate::number::{floor_grouped, parse_loose};

pub const NO_LIQUID_POSITIONS: &str = "No liquid positions";

/// A row picked for a top-N list together with the amount it was ranked by.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a, T> {
    pub row: &'a T,
    pub value: f64,
}

impl<T> Ranked<'_, T> {
    /// Share of `total` in percent, `0` when the total is not positive.
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total * 100.0
        } else {
            0.0
        }
    }
}

/// Parses `value` of each row loosely, keeps strictly positive amounts and
/// returns the `limit` largest. Equal amounts keep input order.
pub fn top_by<'a, T, F>(rows: &'a [T], limit: usize, value: F) -> Vec<Ranked<'a, T>>
where
    F: Fn(&T) -> &str,
{
    let mut ranked: Vec<_> = rows
        .iter()
        .filter_map(|row| {
            parse_loose(value(row))
                .filter(|amount| *amount > 0.0)
                .map(|amount| Ranked { row, value: amount })
        })
        .collect();
    ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

pub fn top_liquid(investments: &[Investment], limit: usize) -> Vec<Ranked<'_, Investment>> {
    top_by(investments, limit, |inv| inv.liquid_value.as_str())
}

pub fn top_biggest(investments: &[Investment], limit: usize) -> Vec<Ranked<'_, Investment>> {
    top_by(investments, limit, |inv| inv.total_value.as_str())
}

pub fn top_realised(investments: &[Investment], limit: usize) -> Vec<Ranked<'_, Investment>> {
    top_by(investments, limit, |inv| inv.realised_value.as_str())
}

pub fn top_individual_liquid(
    investments: &[IndividualInvestment],
    limit: usize,
) -> Vec<Ranked<'_, IndividualInvestment>> {
    top_by(investments, limit, |inv| inv.liquid_value.as_str())
}

pub fn top_individual_biggest(
    investments: &[IndividualInvestment],
    limit: usize,
) -> Vec<Ranked<'_, IndividualInvestment>> {
    top_by(investments, limit, |inv| inv.total_value.as_str())
}

pub fn top_individual_realised(
    investments: &[IndividualInvestment],
    limit: usize,
) -> Vec<Ranked<'_, IndividualInvestment>> {
    top_by(investments, limit, |inv| inv.realised_value.as_str())
}

/// Combined amount of a top-N list.
pub fn ranked_total<T>(ranked: &[Ranked<'_, T>]) -> f64 {
    ranked.iter().map(|pos| pos.value).sum()
}

/// One-line summary such as `Hatom: $12,000 • Peaq: $950`.
pub fn liquid_summary<T, F>(ranked: &[Ranked<'_, T>], name: F) -> String
where
    F: Fn(&T) -> &str,
{
    if ranked.is_empty() {
        return NO_LIQUID_POSITIONS.to_owned();
    }
    ranked
        .iter()
        .map(|pos| format!("{}: ${}", name(pos.row), floor_grouped(pos.value)))
        .collect::<Vec<_>>()
        .join(" • ")
}
