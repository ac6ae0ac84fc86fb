//! Per-column rendering of the investments tables.

use crate::{
    format::{
        DistributionCurrency, UnlockKind, format_cell, format_outstanding_distribution,
        format_percentage, format_price, format_roi, format_tokens_received, format_unlock_column,
    },
    number::parse_float_prefix,
    sort::ColumnKey,
};

/// Colour hint for a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Gain,
    Loss,
}

impl Tone {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Gain => "gain",
            Self::Loss => "loss",
        }
    }
}

fn or_placeholder(formatted: String) -> String {
    if formatted.is_empty() {
        "-".to_owned()
    } else {
        formatted
    }
}

/// Cell text for the fund table.
pub fn fund_cell(key: ColumnKey, raw: &str) -> String {
    match key {
        ColumnKey::NextUnlock => format_unlock_column(raw, UnlockKind::Days),
        ColumnKey::NextUnlock2 => format_unlock_column(raw, UnlockKind::Currency),
        ColumnKey::FullUnlock => format_unlock_column(raw, UnlockKind::DaysFull),
        ColumnKey::BuyPrice | ColumnKey::CurrentPrice => format_price(raw),
        ColumnKey::Vesting => or_placeholder(raw.to_owned()),
        _ => or_placeholder(format_cell(raw)),
    }
}

/// Cell text for an individual portfolio table.
pub fn individual_cell(key: ColumnKey, raw: &str) -> String {
    match key {
        ColumnKey::TotalInvested
        | ColumnKey::TotalValue
        | ColumnKey::RealisedValue
        | ColumnKey::UnrealisedValue
        | ColumnKey::RealisedPnl
        | ColumnKey::LiquidValue => format_tokens_received(raw),
        ColumnKey::Share | ColumnKey::PercentReceived | ColumnKey::PercentSold => {
            format_percentage(raw)
        }
        ColumnKey::UnrealisedRoi | ColumnKey::RealisedRoi => format_roi(raw),
        ColumnKey::OutstandingUsdc => {
            format_outstanding_distribution(raw, DistributionCurrency::USDC)
        }
        ColumnKey::OutstandingEth => format_outstanding_distribution(raw, DistributionCurrency::ETH),
        ColumnKey::OutstandingSol => format_outstanding_distribution(raw, DistributionCurrency::SOL),
        _ => or_placeholder(format_cell(raw)),
    }
}

fn signed_number(formatted: &str) -> Option<f64> {
    let digits: String = formatted
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    parse_float_prefix(&digits)
}

/// Realised P&L is red when negative, green when positive; multiples are red
/// below `1x`. Every other column stays neutral.
pub fn tone(key: ColumnKey, formatted: &str) -> Tone {
    match key {
        ColumnKey::RealisedPnl => {
            if formatted == "-" {
                Tone::Neutral
            } else if formatted.contains(['-', '(']) {
                Tone::Loss
            } else if signed_number(formatted).is_some_and(|n| n > 0.0) {
                Tone::Gain
            } else {
                Tone::Neutral
            }
        }
        ColumnKey::Roi | ColumnKey::RealisedRoi | ColumnKey::UnrealisedRoi => {
            match signed_number(formatted) {
                Some(multiple) if multiple < 1.0 => Tone::Loss,
                Some(_) => Tone::Gain,
                None => Tone::Neutral,
            }
        }
        _ => Tone::Neutral,
    }
}
