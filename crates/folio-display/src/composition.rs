//! Composition block of an individual portfolio.

use folio_types::{IndividualInvestment, Investment, PortfolioSummary};

use crate::number::{parse_float_prefix, parse_loose};

/// Holdings excluded from the pre-TGE count: priced at par but already live.
const PRE_TGE_EXCLUDED: &str = "kebapp";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Composition {
    pub investments: usize,
    pub pre_tge: usize,
    pub listed: usize,
    pub total_invested: f64,
    /// Σ invested × fund-level received fraction.
    pub received: f64,
}

impl Composition {
    /// `received` as a percentage of `total_invested`.
    pub fn received_percentage(&self) -> f64 {
        if self.total_invested > 0.0 {
            self.received / self.total_invested * 100.0
        } else {
            0.0
        }
    }

    /// Realised plus liquid value per dollar of tokens received, `0` when
    /// nothing has been received yet.
    pub fn return_on_received(&self, summary: &PortfolioSummary) -> f64 {
        if self.received <= 0.0 {
            return 0.0;
        }
        let realised = parse_loose(&summary.realised_value).unwrap_or(0.0);
        let liquid = parse_loose(&summary.liquid_value).unwrap_or(0.0);
        (realised + liquid) / self.received
    }
}

/// Paper gain of a portfolio: total value minus total invested.
pub fn unrealised_pnl(summary: &PortfolioSummary) -> f64 {
    let value = parse_loose(&summary.total_value).unwrap_or(0.0);
    let invested = parse_loose(&summary.total_invested).unwrap_or(0.0);
    value - invested
}

/// A holding is pre-TGE when its unrealised multiple is exactly one.
pub fn is_pre_tge(investment: &IndividualInvestment) -> bool {
    if investment.name.to_lowercase().contains(PRE_TGE_EXCLUDED) {
        return false;
    }
    let roi = investment.unrealised_roi.trim();
    let bare = roi.strip_suffix(['x', 'X']).unwrap_or(roi);
    parse_float_prefix(bare).is_some_and(|multiple| (multiple - 1.0).abs() < f64::EPSILON)
}

/// Reads a received percentage as a fraction.
///
/// `"45%"` and `"45"` both mean 45 %, while `"0.45"` is already a fraction.
/// Placeholders yield `None`.
pub fn received_fraction(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() || value == "-" {
        return None;
    }
    if value.contains('%') {
        return parse_float_prefix(&value.replacen('%', "", 1)).map(|pct| pct / 100.0);
    }
    parse_float_prefix(value).map(|n| if n > 1.0 { n / 100.0 } else { n })
}

pub fn composition(holdings: &[IndividualInvestment], fund: &[Investment]) -> Composition {
    let pre_tge = holdings.iter().filter(|inv| is_pre_tge(inv)).count();

    let mut total_invested = 0.0;
    let mut received = 0.0;
    for holding in holdings {
        let invested = parse_loose(&holding.total_invested).unwrap_or(0.0);
        total_invested += invested;

        let fraction = fund
            .iter()
            .find(|row| row.name == holding.name)
            .and_then(|row| received_fraction(&row.percent_received));
        if let Some(fraction) = fraction {
            received += invested * fraction;
        }
    }

    Composition {
        investments: holdings.len(),
        pre_tge,
        listed: holdings.len().saturating_sub(pre_tge),
        total_invested,
        received,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(name: &str, invested: &str, roi: &str) -> IndividualInvestment {
        IndividualInvestment {
            name: name.to_owned(),
            total_invested: invested.to_owned(),
            unrealised_roi: roi.to_owned(),
            ..IndividualInvestment::default()
        }
    }

    fn fund_row(name: &str, percent_received: &str) -> Investment {
        Investment {
            name: name.to_owned(),
            percent_received: percent_received.to_owned(),
            ..Investment::default()
        }
    }

    #[test]
    fn test_received_fraction() {
        assert_eq!(received_fraction("45%"), Some(0.45));
        assert_eq!(received_fraction("45"), Some(0.45));
        assert_eq!(received_fraction("0.45"), Some(0.45));
        assert_eq!(received_fraction("1"), Some(1.0));
        assert_eq!(received_fraction("-"), None);
        assert_eq!(received_fraction(""), None);
        assert_eq!(received_fraction("tbd"), None);
    }

    #[test]
    fn test_pre_tge_detection() {
        assert!(is_pre_tge(&holding("Peaq", "", "1.00x")));
        assert!(is_pre_tge(&holding("Peaq", "", "1")));
        assert!(!is_pre_tge(&holding("Peaq", "", "1.01x")));
        assert!(!is_pre_tge(&holding("Kebapp Seed", "", "1.00x")));
        assert!(!is_pre_tge(&holding("Peaq", "", "-")));
    }

    #[test]
    fn test_composition() {
        let holdings = vec![
            holding("Hatom", "$10,000", "2.5x"),
            holding("Peaq", "$5,000", "1.00x"),
            holding("Kebapp", "$1,000", "1.00x"),
            holding("Orphan", "$4,000", "0.3x"),
        ];
        let fund = vec![
            fund_row("Hatom", "80%"),
            fund_row("Peaq", "0.5"),
            fund_row("Kebapp", "-"),
        ];

        let result = composition(&holdings, &fund);
        assert_eq!(result.investments, 4);
        assert_eq!(result.pre_tge, 1);
        assert_eq!(result.listed, 3);
        assert!((result.total_invested - 20_000.0).abs() < 1e-9);
        assert!((result.received - 10_500.0).abs() < 1e-9);
        assert!((result.received_percentage() - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_unrealised_pnl() {
        let summary = PortfolioSummary {
            total_invested: "$15,000".to_owned(),
            total_value: "$12,499.6".to_owned(),
            ..PortfolioSummary::default()
        };
        assert!((unrealised_pnl(&summary) + 2_500.4).abs() < 1e-9);
        assert!(unrealised_pnl(&PortfolioSummary::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_return_on_received() {
        let summary = PortfolioSummary {
            realised_value: "$6,000".to_owned(),
            liquid_value: "9000".to_owned(),
            ..PortfolioSummary::default()
        };
        let received = Composition {
            received: 10_000.0,
            ..Composition::default()
        };
        assert!((received.return_on_received(&summary) - 1.5).abs() < 1e-9);
        assert!(
            Composition::default()
                .return_on_received(&summary)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_empty_portfolio() {
        let result = composition(&[], &[]);
        assert_eq!(result, Composition::default());
        assert!(result.received_percentage().abs() < f64::EPSILON);
    }
}
