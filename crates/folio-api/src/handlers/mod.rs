pub mod pages;
pub mod portfolio;
pub mod refresh;

pub use pages::{analytics_page, dashboard_page};
pub use portfolio::get_portfolio;
pub use refresh::refresh_prices;
