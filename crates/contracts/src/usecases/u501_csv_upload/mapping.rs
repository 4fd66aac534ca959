use serde::{Deserialize, Serialize};

/// Field of the sales import a source column can feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetField {
    OutletId,
    OutletName,
    DsrId,
    SkuId,
    Quantity,
    Revenue,
    Date,
    Channel,
    Ignore,
}

impl TargetField {
    pub const ALL: [TargetField; 9] = [
        TargetField::OutletId,
        TargetField::OutletName,
        TargetField::DsrId,
        TargetField::SkuId,
        TargetField::Quantity,
        TargetField::Revenue,
        TargetField::Date,
        TargetField::Channel,
        TargetField::Ignore,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TargetField::OutletId => "outlet_id",
            TargetField::OutletName => "outlet_name",
            TargetField::DsrId => "dsr_id",
            TargetField::SkuId => "sku_id",
            TargetField::Quantity => "quantity",
            TargetField::Revenue => "revenue",
            TargetField::Date => "date",
            TargetField::Channel => "channel",
            TargetField::Ignore => "ignore",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetField::OutletId => "Outlet ID",
            TargetField::OutletName => "Outlet Name",
            TargetField::DsrId => "DSR ID",
            TargetField::SkuId => "SKU ID",
            TargetField::Quantity => "Quantity",
            TargetField::Revenue => "Revenue",
            TargetField::Date => "Date",
            TargetField::Channel => "Channel",
            TargetField::Ignore => "-- Ignore --",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        TargetField::ALL.into_iter().find(|f| f.code() == code)
    }
}

/// Source column paired with the field it feeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub source_column: String,
    pub target: TargetField,
}

/// Suggests a target for a file header
pub trait ColumnMatcher {
    fn suggest(&self, header: &str) -> TargetField;
}

/// Matches when the lower-cased header contains every `all_of` keyword and,
/// if `any_of` is non-empty, at least one of those
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRule {
    pub all_of: &'static [&'static str],
    pub any_of: &'static [&'static str],
    pub target: TargetField,
}

/// Ordered rule table, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatcher {
    rules: Vec<MatchRule>,
}

impl MatchRule {
    pub fn matches(&self, header_lower: &str) -> bool {
        self.all_of.iter().all(|k| header_lower.contains(k))
            && (self.any_of.is_empty() || self.any_of.iter().any(|k| header_lower.contains(k)))
    }
}

impl KeywordMatcher {
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self { rules }
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        const fn rule(
            all_of: &'static [&'static str],
            any_of: &'static [&'static str],
            target: TargetField,
        ) -> MatchRule {
            MatchRule {
                all_of,
                any_of,
                target,
            }
        }

        Self::new(vec![
            rule(&["store", "code"], &[], TargetField::OutletId),
            rule(&["store", "name"], &[], TargetField::OutletName),
            rule(&[], &["salesman", "dsr"], TargetField::DsrId),
            rule(&[], &["sku", "product"], TargetField::SkuId),
            rule(&[], &["qty", "quantity"], TargetField::Quantity),
            rule(&[], &["amount", "revenue"], TargetField::Revenue),
            rule(&["date"], &[], TargetField::Date),
            rule(&["channel"], &[], TargetField::Channel),
        ])
    }
}

impl ColumnMatcher for KeywordMatcher {
    fn suggest(&self, header: &str) -> TargetField {
        let lower = header.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.target)
            .unwrap_or(TargetField::Ignore)
    }
}

pub fn suggest_mappings<M: ColumnMatcher + ?Sized>(
    headers: &[String],
    matcher: &M,
) -> Vec<ColumnMapping> {
    headers
        .iter()
        .map(|header| ColumnMapping {
            source_column: header.clone(),
            target: matcher.suggest(header),
        })
        .collect()
}

/// Returns `false` when no mapping has that source column
pub fn update_mapping(mappings: &mut [ColumnMapping], source: &str, target: TargetField) -> bool {
    let mut updated = false;
    for mapping in mappings.iter_mut().filter(|m| m.source_column == source) {
        mapping.target = target;
        updated = true;
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_csv_upload::SAMPLE_COLUMNS;

    fn headers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sample_columns_mapping() {
        let mappings = suggest_mappings(&headers(&SAMPLE_COLUMNS), &KeywordMatcher::default());
        let targets: Vec<TargetField> = mappings.iter().map(|m| m.target).collect();
        assert_eq!(
            targets,
            vec![
                TargetField::OutletId,
                TargetField::OutletName,
                TargetField::DsrId,
                TargetField::SkuId,
                TargetField::Quantity,
                TargetField::Revenue,
                TargetField::Date,
                TargetField::Channel,
            ]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let matcher = KeywordMatcher::default();
        // "product" wins over "date"
        assert_eq!(matcher.suggest("Product Launch Date"), TargetField::SkuId);
        assert_eq!(matcher.suggest("DSR Store Code"), TargetField::OutletId);
        assert_eq!(matcher.suggest("Remarks"), TargetField::Ignore);
        assert_eq!(matcher.suggest("Store"), TargetField::Ignore);
    }

    #[test]
    fn test_custom_rules() {
        let matcher = KeywordMatcher::new(vec![MatchRule {
            all_of: &["beat"],
            any_of: &[],
            target: TargetField::DsrId,
        }]);
        assert_eq!(matcher.suggest("Beat Owner"), TargetField::DsrId);
        assert_eq!(matcher.suggest("Salesman"), TargetField::Ignore);
    }

    #[test]
    fn test_update_mapping() {
        let mut mappings =
            suggest_mappings(&headers(&["Qty Sold", "Notes"]), &KeywordMatcher::default());
        assert!(update_mapping(&mut mappings, "Notes", TargetField::Channel));
        assert!(!update_mapping(&mut mappings, "Missing", TargetField::Date));
        assert_eq!(mappings[1].target, TargetField::Channel);
        assert_eq!(mappings[0].target, TargetField::Quantity);
    }

    #[test]
    fn test_target_codes() {
        for field in TargetField::ALL {
            assert_eq!(TargetField::from_code(field.code()), Some(field));
        }
        assert_eq!(TargetField::Ignore.label(), "-- Ignore --");
    }
}
