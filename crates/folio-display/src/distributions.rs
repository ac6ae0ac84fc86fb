//! Distributions block of an individual portfolio.

use std::cmp::Ordering;

use folio_types::IndividualInvestment;

use crate::{
    format::DistributionCurrency,
    number::{format_grouped, parse_float_prefix, parse_loose, round_half_up, to_fixed},
};

impl DistributionCurrency {
    pub const ALL: [Self; 3] = [Self::USDC, Self::ETH, Self::SOL];

    /// Smallest amount owed by a single holding that is worth listing.
    pub const fn threshold(self) -> f64 {
        match self {
            Self::USDC => 20.0,
            Self::ETH => 0.05,
            Self::SOL => 0.1,
        }
    }

    fn outstanding_of(self, investment: &IndividualInvestment) -> &str {
        match self {
            Self::USDC => &investment.outstanding_usdc,
            Self::ETH => &investment.outstanding_eth,
            Self::SOL => &investment.outstanding_sol,
        }
    }
}

/// Reads an amount after dropping everything except digits, `.` and `-`.
pub fn numeric_amount(value: &str) -> Option<f64> {
    let kept: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    parse_float_prefix(&kept)
}

/// Reads a multiple such as `"0.85x"`. Unreadable values count as zero.
pub fn multiple(value: &str) -> f64 {
    let kept: String = value
        .chars()
        .filter(|c| *c != 'x' && !c.is_whitespace())
        .collect();
    parse_float_prefix(&kept).unwrap_or(0.0)
}

/// Cash paid out so far: Σ invested × DPI over the holdings.
pub fn total_distributed(holdings: &[IndividualInvestment]) -> f64 {
    holdings
        .iter()
        .map(|inv| parse_loose(&inv.total_invested).unwrap_or(0.0) * multiple(&inv.dpi))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outstanding<'a> {
    pub name: &'a str,
    pub amount: f64,
}

/// Holdings owed more than the currency threshold, largest first.
pub fn outstanding_by_holding(
    holdings: &[IndividualInvestment],
    currency: DistributionCurrency,
) -> Vec<Outstanding<'_>> {
    let mut owed: Vec<_> = holdings
        .iter()
        .filter_map(|inv| {
            numeric_amount(currency.outstanding_of(inv))
                .filter(|amount| *amount > currency.threshold())
                .map(|amount| Outstanding {
                    name: &inv.name,
                    amount,
                })
        })
        .collect();
    owed.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    owed
}

/// Amount owed by one holding: whole USDC, ETH to four decimals, SOL to two.
pub fn format_owed(amount: f64, currency: DistributionCurrency) -> String {
    match currency {
        DistributionCurrency::USDC => format_grouped(round_half_up(amount), 0, 0),
        DistributionCurrency::ETH => to_fixed(amount, 4),
        DistributionCurrency::SOL => to_fixed(amount, 2),
    }
}

/// Portfolio-wide outstanding amount with its currency suffix.
///
/// A USDC total under the threshold shows as `0`.
pub fn format_outstanding_total(value: &str, currency: DistributionCurrency) -> String {
    let amount = numeric_amount(value).unwrap_or(0.0);
    let shown = match currency {
        DistributionCurrency::USDC if amount >= currency.threshold() => {
            format_grouped(amount, 0, 3)
        }
        DistributionCurrency::USDC => "0".to_owned(),
        DistributionCurrency::ETH => to_fixed(amount.abs(), 4),
        DistributionCurrency::SOL => to_fixed(amount.abs(), 2),
    };
    format!("{shown} {currency}")
}

/// `"1.2534x"` → `"1.25x"`, blanks read as `0.00x`.
pub fn format_dpi(value: &str) -> String {
    format!("{}x", to_fixed(multiple(value), 2))
}
