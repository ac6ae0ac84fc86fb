//! Server-rendered dashboard pages.
//!
//! Pages are plain strings assembled with `format!`; charts are inline SVG.
//! Every value coming from the sheet goes through [`escape_html`].

pub mod analytics;
pub mod charts;
mod css;
pub mod fund;
pub mod individual;
mod js;
mod layout;
pub mod tables;
pub mod widgets;

use folio_types::PortfolioSnapshot;
use url::form_urlencoded;

use crate::PageConfig;

pub use layout::{error_page, page};

pub const FUND_KEY: &str = "fund";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// The page being looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Fund,
    Portfolio(String),
    Analytics,
}

impl View {
    /// `?portfolio=` value to view. Missing, empty and `fund` all select the
    /// fund.
    pub fn from_query(portfolio: Option<&str>) -> Self {
        match portfolio.map(str::trim) {
            None | Some("") => Self::Fund,
            Some(key) if key.eq_ignore_ascii_case(FUND_KEY) => Self::Fund,
            Some(key) => Self::Portfolio(key.to_string()),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Fund => format!("/?portfolio={FUND_KEY}"),
            Self::Portfolio(key) => format!("/?portfolio={}", encode_query_value(key)),
            Self::Analytics => "/analytics".to_string(),
        }
    }
}

/// Everything the page chrome needs besides the body.
pub struct PageContext<'a> {
    pub config: &'a PageConfig,
    pub view: View,
    /// `(key, label)` of each individual portfolio, in key order.
    pub portfolios: Vec<(&'a str, &'a str)>,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a PageConfig, view: View, snapshot: Option<&'a PortfolioSnapshot>) -> Self {
        let portfolios: Vec<(&str, &str)> = snapshot
            .map(|snapshot| {
                snapshot
                    .individual_portfolios
                    .iter()
                    .map(|(key, portfolio)| {
                        let label = if portfolio.name.trim().is_empty() {
                            key.as_str()
                        } else {
                            portfolio.name.as_str()
                        };
                        (key.as_str(), label)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            config,
            view,
            portfolios,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_view_from_query() {
        assert_eq!(View::from_query(None), View::Fund);
        assert_eq!(View::from_query(Some("")), View::Fund);
        assert_eq!(View::from_query(Some("FUND")), View::Fund);
        assert_eq!(
            View::from_query(Some("matthias")),
            View::Portfolio("matthias".to_string())
        );
    }

    #[test]
    fn test_view_href_encodes_key() {
        assert_eq!(View::Fund.href(), "/?portfolio=fund");
        assert_eq!(
            View::Portfolio("a b&c".to_string()).href(),
            "/?portfolio=a+b%26c"
        );
        assert_eq!(View::Analytics.href(), "/analytics");
    }
}
