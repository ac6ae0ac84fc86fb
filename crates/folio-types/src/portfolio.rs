use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{de, investment::IndividualInvestment};

/// A portfolio manager's slice of the fund.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndividualPortfolio {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    /// Sheet range the block was read from, kept for troubleshooting.
    #[serde(default, deserialize_with = "de::text")]
    pub range: String,
    #[serde(default, deserialize_with = "de::list")]
    pub investments: Vec<IndividualInvestment>,
    #[serde(default)]
    pub summary: Option<PortfolioSummary>,
}

/// Totals row of an individual portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    #[serde(default, deserialize_with = "de::text")]
    pub total_invested: String,
    #[serde(default, deserialize_with = "de::text")]
    pub share: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unrealised_value: String,
    #[serde(default, rename = "realisedPnL", deserialize_with = "de::text")]
    pub realised_pnl: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unrealised_roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_roi: String,
    #[serde(default, rename = "outstandingUSDC", deserialize_with = "de::text")]
    pub outstanding_usdc: String,
    #[serde(default, rename = "outstandingETH", deserialize_with = "de::text")]
    pub outstanding_eth: String,
    #[serde(default, rename = "outstandingSOL", deserialize_with = "de::text")]
    pub outstanding_sol: String,
    #[serde(default, deserialize_with = "de::text")]
    pub liquid_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub dpi: String,
    #[serde(default, rename = "withdrawUSD", deserialize_with = "de::text")]
    pub withdraw_usd: String,
    #[serde(default, rename = "withdrawETH", deserialize_with = "de::text")]
    pub withdraw_eth: String,
    #[serde(default, rename = "withdrawSOL", deserialize_with = "de::text")]
    pub withdraw_sol: String,
}
