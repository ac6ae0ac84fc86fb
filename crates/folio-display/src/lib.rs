//! Pure display helpers shared by the dashboard pages.
//!
//! Nothing here computes financial truth: values arrive pre-aggregated from the
//! spreadsheet and are only re-parsed for ordering, ranking and presentation.

pub mod categories;
pub mod cells;
pub mod composition;
pub mod distributions;
pub mod format;
pub mod number;
pub mod rankings;
pub mod sort;
pub mod vesting;

pub use format::{DistributionCurrency, UnlockKind};
pub use number::{parse_loose, parse_number_like};
pub use sort::{Column, ColumnKey, SortDirection, SortState, TableRow};
