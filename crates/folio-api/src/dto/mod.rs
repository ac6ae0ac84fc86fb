pub mod query;
pub mod response;

pub use query::DashboardQuery;
pub use response::{ErrorResponse, RefreshResponse};
