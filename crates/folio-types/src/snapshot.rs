use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    category::BlockchainCategory,
    de,
    investment::Investment,
    overview::{ListedProjects, Overview},
    portfolio::IndividualPortfolio,
    vesting::VestingMonth,
};

/// Everything the spreadsheet macro returns in one call.
///
/// Every section is optional: older sheet revisions omit some of them and the
/// dashboard renders placeholders instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub overview: Option<Overview>,
    #[serde(default, deserialize_with = "de::list")]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub listed_projects: Option<ListedProjects>,
    #[serde(default, deserialize_with = "de::entries")]
    pub individual_portfolios: BTreeMap<String, IndividualPortfolio>,
    #[serde(default, deserialize_with = "de::list")]
    #[schema(value_type = Vec<Object>)]
    pub vesting_chart: Vec<VestingMonth>,
    #[serde(default, deserialize_with = "de::list")]
    pub blockchain_categories: Vec<BlockchainCategory>,
    #[serde(default, deserialize_with = "de::entries")]
    #[schema(value_type = Object)]
    pub individual_vesting_data: BTreeMap<String, Vec<VestingMonth>>,
}

impl PortfolioSnapshot {
    /// Looks up an individual portfolio by its key (e.g. `"matthias"`).
    pub fn portfolio(&self, key: &str) -> Option<&IndividualPortfolio> {
        self.individual_portfolios.get(key)
    }

    /// Finds the fund-level row for an investment by exact name.
    pub fn fund_investment(&self, name: &str) -> Option<&Investment> {
        self.investments.iter().find(|inv| inv.name == name)
    }

    /// Vesting schedule for one portfolio.
    ///
    /// The sheet keys individual vesting blocks by manager name ("Matthias"),
    /// while portfolios are keyed in lower case, so the lookup ignores case.
    pub fn vesting_for(&self, key: &str) -> &[VestingMonth] {
        self.individual_vesting_data
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map_or(&[], |(_, months)| months.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "overview": {
                "totalInvested": "$1,000,000",
                "totalValue": 1420000,
                "roi": "1.42x",
                "investmentsCount": 12,
                "listedCount": "9",
                "nonListedCount": null,
                "percentSold": null
            },
            "investments": [
                {"name": "Hatom", "totalValue": "$120,000", "roi": 2.1, "unknownColumn": "ignored"}
            ],
            "listedProjects": {"tokensReceivedROI": "1.8x"},
            "individualPortfolios": {
                "matthias": {
                    "name": "Matthias Portfolio",
                    "investments": [{"name": "Hatom", "outstandingUSDC": 12.5}],
                    "summary": {"totalInvested": "$50,000", "withdrawETH": "0.5"}
                },
                "karl": null
            },
            "vestingChart": [{"month": "2025-03", "Hatom": 10}],
            "blockchainCategories": [
                {"category": "DeFi", "investmentsCount": 3, "investments": ["Hatom", 7, null], "percentage": "12.5"}
            ],
            "individualVestingData": {"Matthias": [{"month": "2025-04", "Hatom": 5}]}
        })
    }

    #[test]
    fn test_decode_snapshot() {
        let snapshot: PortfolioSnapshot = serde_json::from_value(sample()).unwrap();

        let overview = snapshot.overview.as_ref().unwrap();
        assert_eq!(overview.total_invested, "$1,000,000");
        assert_eq!(overview.total_value, "1420000");
        assert_eq!(overview.investments_count, Some(12));
        assert_eq!(overview.listed_count, Some(9));
        assert_eq!(overview.non_listed_count, None);
        assert_eq!(overview.percent_sold, "");

        assert_eq!(snapshot.investments.len(), 1);
        assert_eq!(snapshot.investments[0].roi, "2.1");
        assert_eq!(
            snapshot.listed_projects.as_ref().unwrap().tokens_received_roi,
            "1.8x"
        );

        assert_eq!(snapshot.individual_portfolios.len(), 1);
        let matthias = snapshot.portfolio("matthias").unwrap();
        assert_eq!(matthias.investments[0].outstanding_usdc, "12.5");
        assert_eq!(matthias.summary.as_ref().unwrap().withdraw_eth, "0.5");
        assert!(snapshot.portfolio("karl").is_none());

        let category = &snapshot.blockchain_categories[0];
        assert_eq!(category.investment_count, Some(3));
        assert_eq!(category.investments, vec!["Hatom", "7"]);
        assert!((category.percentage - 12.5).abs() < f64::EPSILON);

        assert_eq!(snapshot.vesting_chart[0].month, "2025-03");
        assert_eq!(snapshot.vesting_for("matthias").len(), 1);
        assert!(snapshot.vesting_for("karl").is_empty());
        assert!(snapshot.fund_investment("Hatom").is_some());
    }

    #[test]
    fn test_decode_empty_and_null_sections() {
        let snapshot: PortfolioSnapshot = serde_json::from_value(json!({
            "investments": null,
            "individualPortfolios": null,
            "vestingChart": null
        }))
        .unwrap();

        assert!(snapshot.overview.is_none());
        assert!(snapshot.investments.is_empty());
        assert!(snapshot.individual_portfolios.is_empty());
        assert!(snapshot.vesting_chart.is_empty());
    }
}
