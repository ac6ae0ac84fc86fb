use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use serde_json::Value;

use crate::de::{value_to_amount, value_to_text};

const MONTH_KEY: &str = "month";

/// Token unlock amounts for one month, keyed by project.
///
/// On the wire this is a flat object: `{"month": "2025-03", "Hatom": 1200.5, ...}`.
/// Amounts are monthly deltas already floored at zero by the spreadsheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VestingMonth {
    /// `YYYY-MM`
    pub month: String,
    /// Project amounts in the order the upstream object listed them.
    pub amounts: Vec<(String, f64)>,
}

impl VestingMonth {
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            amounts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_amount(mut self, project: impl Into<String>, amount: f64) -> Self {
        self.amounts.push((project.into(), amount));
        self
    }

    pub fn amount(&self, project: &str) -> f64 {
        self.amounts
            .iter()
            .find(|(name, _)| name == project)
            .map_or(0.0, |(_, amount)| *amount)
    }

    pub fn total(&self) -> f64 {
        self.amounts.iter().map(|(_, amount)| amount).sum()
    }
}

impl Serialize for VestingMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.amounts.len() + 1))?;
        map.serialize_entry(MONTH_KEY, &self.month)?;
        for (project, amount) in &self.amounts {
            map.serialize_entry(project, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VestingMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VestingMonthVisitor)
    }
}

struct VestingMonthVisitor;

impl<'de> Visitor<'de> for VestingMonthVisitor {
    type Value = VestingMonth;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with a `month` key and per-project amounts")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut vesting = VestingMonth::default();
        while let Some(key) = map.next_key::<String>()? {
            let value: Value = map.next_value()?;
            if key == MONTH_KEY {
                vesting.month = value_to_text(value);
            } else if !vesting.amounts.iter().any(|(name, _)| *name == key) {
                vesting.amounts.push((key, value_to_amount(&value)));
            }
        }
        Ok(vesting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_amounts() {
        let month: VestingMonth = serde_json::from_str(
            r#"{"month":"2025-03","Hatom":1200.5,"Peaq":"300","Tap":null}"#,
        )
        .unwrap();

        assert_eq!(month.month, "2025-03");
        assert_eq!(month.amounts.len(), 3);
        assert!((month.amount("Hatom") - 1200.5).abs() < f64::EPSILON);
        assert!((month.amount("Peaq") - 300.0).abs() < f64::EPSILON);
        assert!(month.amount("Tap").abs() < f64::EPSILON);
        assert!(month.amount("Unknown").abs() < f64::EPSILON);
        assert!((month.total() - 1500.5).abs() < 1e-9);
    }

    #[test]
    fn test_encode_flat_object() {
        let month = VestingMonth::new("2025-04").with_amount("CTA", 42.0);
        let encoded = serde_json::to_value(&month).unwrap();
        assert_eq!(encoded, serde_json::json!({"month": "2025-04", "CTA": 42.0}));
    }
}
