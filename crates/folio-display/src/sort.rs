//! Column catalogues and the table comparator.

use std::cmp::Ordering;

use folio_types::{IndividualInvestment, Investment};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::number::parse_number_like;

/// Every sortable column across the fund and individual tables.
///
/// The string form is the camelCase field name used by the sheet and by the
/// `?sort=` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ColumnKey {
    Name,
    TotalInvested,
    TotalValue,
    RealisedValue,
    #[strum(serialize = "realisedPnL")]
    RealisedPnl,
    Roi,
    RealisedRoi,
    PercentReceived,
    PercentSold,
    LiquidValue,
    NextUnlock,
    NextUnlock2,
    FullUnlock,
    BuyPrice,
    CurrentPrice,
    AvgSellPrice,
    Vesting,
    Share,
    UnrealisedValue,
    UnrealisedRoi,
    #[strum(serialize = "outstandingUSDC")]
    OutstandingUsdc,
    #[strum(serialize = "outstandingETH")]
    OutstandingEth,
    #[strum(serialize = "outstandingSOL")]
    OutstandingSol,
    Dpi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub label: &'static str,
    pub numeric: bool,
}

const fn text(key: ColumnKey, label: &'static str) -> Column {
    Column {
        key,
        label,
        numeric: false,
    }
}

const fn numeric(key: ColumnKey, label: &'static str) -> Column {
    Column {
        key,
        label,
        numeric: true,
    }
}

pub const FUND_COLUMNS: &[Column] = &[
    text(ColumnKey::Name, "Name"),
    numeric(ColumnKey::TotalInvested, "Total Invested"),
    numeric(ColumnKey::TotalValue, "Total Value"),
    numeric(ColumnKey::RealisedValue, "Realised Value"),
    numeric(ColumnKey::RealisedPnl, "Realised P&L"),
    numeric(ColumnKey::Roi, "ROI"),
    numeric(ColumnKey::RealisedRoi, "Realised ROI"),
    numeric(ColumnKey::PercentReceived, "% Received"),
    numeric(ColumnKey::PercentSold, "% Sold"),
    numeric(ColumnKey::LiquidValue, "Liquid Value"),
    text(ColumnKey::NextUnlock, "Next Unlock"),
    text(ColumnKey::NextUnlock2, "Next Unlock"),
    text(ColumnKey::FullUnlock, "Full Unlock"),
    numeric(ColumnKey::BuyPrice, "Buy Price"),
    numeric(ColumnKey::CurrentPrice, "Current Price"),
    numeric(ColumnKey::AvgSellPrice, "Avg Sell Price"),
    text(ColumnKey::Vesting, "Vesting"),
];

pub const INDIVIDUAL_COLUMNS: &[Column] = &[
    text(ColumnKey::Name, "Investment"),
    numeric(ColumnKey::TotalInvested, "Total Invested"),
    numeric(ColumnKey::Share, "Share %"),
    numeric(ColumnKey::TotalValue, "Total Value"),
    numeric(ColumnKey::RealisedValue, "Realised Value"),
    numeric(ColumnKey::RealisedPnl, "Realised P&L"),
    numeric(ColumnKey::UnrealisedValue, "Unrealised Value"),
    numeric(ColumnKey::UnrealisedRoi, "Unrealised ROI"),
    numeric(ColumnKey::RealisedRoi, "Realised ROI"),
    numeric(ColumnKey::OutstandingUsdc, "Outstanding USDC"),
    numeric(ColumnKey::OutstandingEth, "Outstanding ETH"),
    numeric(ColumnKey::OutstandingSol, "Outstanding SOL"),
    numeric(ColumnKey::LiquidValue, "Liquid Value"),
    numeric(ColumnKey::Dpi, "DPI"),
    numeric(ColumnKey::PercentReceived, "% Received"),
    numeric(ColumnKey::PercentSold, "% Sold"),
];

pub fn find_column(columns: &[Column], key: ColumnKey) -> Option<&Column> {
    columns.iter().find(|column| column.key == key)
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort column and direction of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: ColumnKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: ColumnKey::TotalValue,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Builds a state from raw query values, falling back to the default for
    /// anything unknown.
    pub fn from_query(sort: Option<&str>, dir: Option<&str>) -> Self {
        let default = Self::default();
        Self {
            key: sort
                .and_then(|key| key.parse().ok())
                .unwrap_or(default.key),
            direction: dir
                .and_then(|dir| dir.parse().ok())
                .unwrap_or(default.direction),
        }
    }

    /// State after a header click: the active column flips direction, any other
    /// column becomes active in descending order.
    #[must_use]
    pub fn toggled(self, key: ColumnKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Desc,
            }
        }
    }
}

/// A table row that exposes its raw cell text per column.
pub trait TableRow {
    fn cell(&self, key: ColumnKey) -> &str;

    fn name(&self) -> &str {
        self.cell(ColumnKey::Name)
    }
}

impl<T: TableRow + ?Sized> TableRow for &T {
    fn cell(&self, key: ColumnKey) -> &str {
        (**self).cell(key)
    }
}

impl TableRow for Investment {
    fn cell(&self, key: ColumnKey) -> &str {
        match key {
            ColumnKey::Name => &self.name,
            ColumnKey::TotalInvested => &self.total_invested,
            ColumnKey::TotalValue => &self.total_value,
            ColumnKey::RealisedValue => &self.realised_value,
            ColumnKey::RealisedPnl => &self.realised_pnl,
            ColumnKey::Roi => &self.roi,
            ColumnKey::RealisedRoi => &self.realised_roi,
            ColumnKey::PercentReceived => &self.percent_received,
            ColumnKey::PercentSold => &self.percent_sold,
            ColumnKey::LiquidValue => &self.liquid_value,
            ColumnKey::NextUnlock => &self.next_unlock,
            ColumnKey::NextUnlock2 => &self.next_unlock2,
            ColumnKey::FullUnlock => &self.full_unlock,
            ColumnKey::BuyPrice => &self.buy_price,
            ColumnKey::CurrentPrice => &self.current_price,
            ColumnKey::AvgSellPrice => &self.avg_sell_price,
            ColumnKey::Vesting => &self.vesting,
            ColumnKey::Share
            | ColumnKey::UnrealisedValue
            | ColumnKey::UnrealisedRoi
            | ColumnKey::OutstandingUsdc
            | ColumnKey::OutstandingEth
            | ColumnKey::OutstandingSol
            | ColumnKey::Dpi => "",
        }
    }
}

/// An individual holding joined with the fund row of the same name.
///
/// Received/sold percentages and prices are only maintained at fund level, so
/// those cells come from the fund row when there is one.
#[derive(Debug, Clone, Copy)]
pub struct IndividualRow<'a> {
    pub investment: &'a IndividualInvestment,
    pub fund: Option<&'a Investment>,
}

impl<'a> IndividualRow<'a> {
    pub fn join(investments: &'a [IndividualInvestment], fund: &'a [Investment]) -> Vec<Self> {
        investments
            .iter()
            .map(|investment| Self {
                investment,
                fund: fund.iter().find(|row| row.name == investment.name),
            })
            .collect()
    }

    fn fund_cell(&self, key: ColumnKey) -> &'a str {
        self.fund.map_or("", |fund| fund.cell(key))
    }
}

impl TableRow for IndividualRow<'_> {
    fn cell(&self, key: ColumnKey) -> &str {
        let inv = self.investment;
        match key {
            ColumnKey::Name => &inv.name,
            ColumnKey::TotalInvested => &inv.total_invested,
            ColumnKey::Share => &inv.share,
            ColumnKey::TotalValue => &inv.total_value,
            ColumnKey::RealisedValue => &inv.realised_value,
            ColumnKey::RealisedPnl => &inv.realised_pnl,
            ColumnKey::UnrealisedValue => &inv.unrealised_value,
            ColumnKey::UnrealisedRoi => &inv.unrealised_roi,
            ColumnKey::RealisedRoi => &inv.realised_roi,
            ColumnKey::OutstandingUsdc => &inv.outstanding_usdc,
            ColumnKey::OutstandingEth => &inv.outstanding_eth,
            ColumnKey::OutstandingSol => &inv.outstanding_sol,
            ColumnKey::LiquidValue => &inv.liquid_value,
            ColumnKey::Dpi => &inv.dpi,
            ColumnKey::PercentReceived
            | ColumnKey::PercentSold
            | ColumnKey::BuyPrice
            | ColumnKey::CurrentPrice
            | ColumnKey::AvgSellPrice => self.fund_cell(key),
            ColumnKey::Roi
            | ColumnKey::NextUnlock
            | ColumnKey::NextUnlock2
            | ColumnKey::FullUnlock
            | ColumnKey::Vesting => "",
        }
    }
}

/// Case-insensitive order with a byte-order tie break, so `"apple"` and
/// `"Apple"` stay adjacent but still have a fixed order.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sorts `rows` in place by the active column of `state`.
///
/// The column's numeric flag comes from `columns`; a key missing from the
/// catalogue sorts as text. The sort is stable.
pub fn sort_rows<T: TableRow>(rows: &mut [T], columns: &[Column], state: SortState) {
    let numeric = find_column(columns, state.key).is_some_and(|column| column.numeric);
    rows.sort_by(|a, b| {
        let (a, b) = (a.cell(state.key), b.cell(state.key));
        let ascending = if numeric {
            parse_number_like(a)
                .partial_cmp(&parse_number_like(b))
                .unwrap_or(Ordering::Equal)
        } else {
            compare_text(a, b)
        };
        match state.direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investment(name: &str, total_value: &str) -> Investment {
        Investment {
            name: name.to_owned(),
            total_value: total_value.to_owned(),
            ..Investment::default()
        }
    }

    fn names<T: TableRow>(rows: &[T]) -> Vec<&str> {
        rows.iter().map(TableRow::name).collect()
    }

    #[test]
    fn test_catalogues() {
        assert_eq!(FUND_COLUMNS.len(), 17);
        assert_eq!(INDIVIDUAL_COLUMNS.len(), 16);
        assert!(!find_column(FUND_COLUMNS, ColumnKey::Vesting).unwrap().numeric);
        assert!(find_column(INDIVIDUAL_COLUMNS, ColumnKey::Dpi).unwrap().numeric);
        assert!(find_column(FUND_COLUMNS, ColumnKey::Dpi).is_none());
    }

    #[test]
    fn test_column_key_strings() {
        assert_eq!(ColumnKey::RealisedPnl.to_string(), "realisedPnL");
        assert_eq!(ColumnKey::OutstandingUsdc.as_ref(), "outstandingUSDC");
        assert_eq!(ColumnKey::NextUnlock2.as_ref(), "nextUnlock2");
        assert_eq!("totalValue".parse::<ColumnKey>().unwrap(), ColumnKey::TotalValue);
        assert!("dropTable".parse::<ColumnKey>().is_err());
    }

    #[test]
    fn test_sort_state_toggle() {
        let state = SortState::default();
        assert_eq!(state.key, ColumnKey::TotalValue);
        assert_eq!(state.direction, SortDirection::Desc);

        let same = state.toggled(ColumnKey::TotalValue);
        assert_eq!(same.direction, SortDirection::Asc);
        assert_eq!(same.toggled(ColumnKey::TotalValue).direction, SortDirection::Desc);

        let other = same.toggled(ColumnKey::Name);
        assert_eq!(other.key, ColumnKey::Name);
        assert_eq!(other.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_state_from_query() {
        let state = SortState::from_query(Some("roi"), Some("ASC"));
        assert_eq!(state.key, ColumnKey::Roi);
        assert_eq!(state.direction, SortDirection::Asc);

        let fallback = SortState::from_query(Some("bogus"), Some("sideways"));
        assert_eq!(fallback, SortState::default());
        assert_eq!(SortState::from_query(None, None), SortState::default());
    }

    #[test]
    fn test_numeric_sort_placeholders_last() {
        let mut rows = vec![
            investment("Tap", "-"),
            investment("Hatom", "$120,000"),
            investment("Peaq", "$9,500"),
            investment("Kebapp", ""),
            investment("CTA", "$1,250,000"),
        ];
        sort_rows(&mut rows, FUND_COLUMNS, SortState::default());
        assert_eq!(names(&rows), ["CTA", "Hatom", "Peaq", "Tap", "Kebapp"]);
    }

    #[test]
    fn test_desc_then_asc_reverses() {
        let mut rows = vec![
            investment("B", "200"),
            investment("A", "300"),
            investment("C", "100"),
            investment("D", "(50)"),
        ];
        sort_rows(&mut rows, FUND_COLUMNS, SortState::default());
        let desc: Vec<String> = names(&rows).into_iter().map(str::to_owned).collect();

        let asc_state = SortState::default().toggled(ColumnKey::TotalValue);
        sort_rows(&mut rows, FUND_COLUMNS, asc_state);
        let mut asc: Vec<String> = names(&rows).into_iter().map(str::to_owned).collect();
        asc.reverse();

        assert_eq!(desc, ["A", "B", "C", "D"]);
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_text_sort_and_stability() {
        let mut rows = vec![
            investment("beta", "1"),
            investment("Alpha", "1"),
            investment("alpha", "2"),
            investment("Gamma", "3"),
        ];
        let state = SortState {
            key: ColumnKey::Name,
            direction: SortDirection::Asc,
        };
        sort_rows(&mut rows, FUND_COLUMNS, state);
        assert_eq!(names(&rows), ["Alpha", "alpha", "beta", "Gamma"]);

        let mut tied = vec![
            investment("first", "5"),
            investment("second", "5"),
            investment("third", "5"),
        ];
        sort_rows(&mut tied, FUND_COLUMNS, SortState::default());
        assert_eq!(names(&tied), ["first", "second", "third"]);
    }

    #[test]
    fn test_individual_rows_use_fund_percentages() {
        let fund = vec![
            Investment {
                name: "Hatom".to_owned(),
                percent_received: "0.8".to_owned(),
                buy_price: "0.25".to_owned(),
                ..Investment::default()
            },
            Investment {
                name: "Peaq".to_owned(),
                percent_received: "0.2".to_owned(),
                ..Investment::default()
            },
        ];
        let holdings = vec![
            IndividualInvestment {
                name: "Peaq".to_owned(),
                percent_received: "0.99".to_owned(),
                ..IndividualInvestment::default()
            },
            IndividualInvestment {
                name: "Orphan".to_owned(),
                ..IndividualInvestment::default()
            },
            IndividualInvestment {
                name: "Hatom".to_owned(),
                ..IndividualInvestment::default()
            },
        ];

        let mut rows = IndividualRow::join(&holdings, &fund);
        assert_eq!(rows[2].cell(ColumnKey::BuyPrice), "0.25");
        assert_eq!(rows[1].cell(ColumnKey::PercentReceived), "");

        let state = SortState {
            key: ColumnKey::PercentReceived,
            direction: SortDirection::Desc,
        };
        sort_rows(&mut rows, INDIVIDUAL_COLUMNS, state);
        assert_eq!(names(&rows), ["Hatom", "Peaq", "Orphan"]);
    }
}
