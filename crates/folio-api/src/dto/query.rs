use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of the dashboard page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// `fund` (default) or the key of an individual portfolio.
    pub portfolio: Option<String>,
    /// Active sort column, e.g. `totalValue`.
    pub sort: Option<String>,
    /// `asc` or `desc`.
    pub dir: Option<String>,
}
