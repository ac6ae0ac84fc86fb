use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::de;

/// Fund-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
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
    #[serde(default, rename = "unrealisedPnL", deserialize_with = "de::text")]
    pub unrealised_pnl: String,
    #[serde(default, deserialize_with = "de::text")]
    pub liquid_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub realised_roi: String,
    #[serde(default, deserialize_with = "de::text")]
    pub percent_received: String,
    #[serde(default, deserialize_with = "de::text")]
    pub percent_sold: String,
    #[serde(default, deserialize_with = "de::count")]
    pub investments_count: Option<u64>,
    #[serde(default, deserialize_with = "de::count")]
    pub listed_count: Option<u64>,
    #[serde(default, deserialize_with = "de::count")]
    pub non_listed_count: Option<u64>,
    #[serde(default, deserialize_with = "de::text")]
    pub tokens_received: String,
    #[serde(default, deserialize_with = "de::text")]
    pub tokens_received_percentage: String,
}

/// Listed-vs-pre-TGE breakdown and the next unlock event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListedProjects {
    #[serde(default, deserialize_with = "de::text")]
    pub total_invested: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_invested_percentage: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_value: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_value_percentage: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock_days: String,
    #[serde(default, deserialize_with = "de::text")]
    pub total_investments: String,
    #[serde(default, deserialize_with = "de::text")]
    pub listed_count: String,
    #[serde(default, deserialize_with = "de::text")]
    pub non_listed_count: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock_amount: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock_days_detailed: String,
    #[serde(default, deserialize_with = "de::text")]
    pub next_unlock_project: String,
    #[serde(default, deserialize_with = "de::text")]
    pub tokens_received: String,
    #[serde(default, deserialize_with = "de::text")]
    pub tokens_received_percentage: String,
    #[serde(default, rename = "tokensReceivedROI", deserialize_with = "de::text")]
    pub tokens_received_roi: String,
}
