use crate::shared::math::percent_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field sales representative with period figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dsr {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub territory_id: String,
    /// Outlets served
    pub outlets: u32,
    pub revenue: f64,
    pub target: f64,
    /// Revenue of the previous period, for trend comparison
    pub previous_revenue: f64,
    pub last_active: NaiveDate,
}

impl Dsr {
    /// Attainment in whole percent, `None` without a positive target
    pub fn achievement(&self) -> Option<i64> {
        percent_of(self.revenue, self.target)
    }

    pub fn is_on_target(&self) -> bool {
        self.achievement().is_some_and(|a| a >= 100)
    }

    /// Case-insensitive match on name, phone or territory id
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.phone.to_lowercase().contains(&query)
            || self.territory_id.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dsr(revenue: f64, target: f64) -> Dsr {
        Dsr {
            id: "DSR1".to_string(),
            name: "Rahul Sharma".to_string(),
            phone: "+91 98765 43210".to_string(),
            territory_id: "T1".to_string(),
            outlets: 45,
            revenue,
            target,
            previous_revenue: 0.0,
            last_active: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_achievement() {
        assert_eq!(dsr(234_500.0, 250_000.0).achievement(), Some(94));
        assert_eq!(dsr(289_000.0, 275_000.0).achievement(), Some(105));
        assert_eq!(dsr(100.0, 0.0).achievement(), None);
        assert!(!dsr(100.0, 0.0).is_on_target());
    }

    #[test]
    fn test_matches() {
        let d = dsr(1.0, 1.0);
        assert!(d.matches("rahul"));
        assert!(d.matches("43210"));
        assert!(d.matches("t1"));
        assert!(d.matches("  "));
        assert!(!d.matches("priya"));
    }
}
