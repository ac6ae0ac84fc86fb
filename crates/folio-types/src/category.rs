use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::de;

/// Aggregate totals for a blockchain category (e.g. "AI", "DeFi").
///
/// Membership is decided upstream by name matching, so `investments` is a
/// best-effort list and may not add up to the category totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainCategory {
    #[serde(default, deserialize_with = "de::text")]
    pub category: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_invested: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_value: String,
    #[serde(default, rename = "realisedPnL", deserialize_with = "de::text")]
    pub realised_pnl: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unrealised_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unrealised_roi: String,
    // older sheet revisions spell it `investmentsCount`
    #[serde(default, alias = "investmentsCount", deserialize_with = "de::count")]
    pub investment_count: Option<u64>,
    #[serde(default, deserialize_with = "de::names")]
    pub investments: Vec<String>,
    #[serde(default, deserialize_with = "de::amount")]
    pub percentage: f64,
}
