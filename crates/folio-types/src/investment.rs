use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::de;

/// One row of the fund-level investment table.
///
/// Every metric is the spreadsheet's own display string (e.g. `"$12,345"`,
/// `"1.42x"`, `"61%"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_invested: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_value: String,
    #[serde(default, rename = "realisedPnL", deserialize_with = "de::text")]
    pub realised_pnl: String,
    #[serde(default, deserialize_with = "de::text")]
    pub roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub percent_received: String,
    #[serde(default, deserialize_with = "de::text")]
    pub percent_sold: String,
    #[serde(default, deserialize_with = "de::text")]
    pub liquid_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock2: String,
    #[serde(default, deserialize_with = "de::text")]
    pub full_unlock: String,
    #[serde(default, deserialize_with = "de::text")]
    pub buy_price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub current_price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub avg_sell_price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub vesting: String,
}

/// One row of a portfolio manager's investment table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndividualInvestment {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
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
    #[serde(default, deserialize_with = "de::text")]
    pub buy_price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub current_price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub avg_sell_price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub percent_received: String,
    #[serde(default, deserialize_with = "de::text")]
    pub percent_sold: String,
    #[serde(default, rename = "withdrawUSD", deserialize_with = "de::text")]
    pub withdraw_usd: String,
    #[serde(default, rename = "withdrawETH", deserialize_with = "de::text")]
    pub withdraw_eth: String,
    #[serde(default, rename = "withdrawSOL", deserialize_with = "de::text")]
    pub withdraw_sol: String,
}
