//! URL query codec for [`Filters`].
//!
//! Only non-default fields are written. Decoding is lenient: unknown keys and
//! values that do not parse are dropped and the field keeps its default.

use super::Filters;
use crate::enums::{Channel, DateRangeKind};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire shape; field order is the parameter order in the URL
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    date_range: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    territory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dsr_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sku_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outlet_type: Option<String>,
}

/// Query string without the leading `?`; empty for default filters
pub fn to_query_string(filters: &Filters) -> String {
    let params = QueryParams {
        date_range: (filters.date_range != DateRangeKind::default())
            .then(|| filters.date_range.code()),
        start_date: filters.start_date.map(|d| d.format(DATE_FORMAT).to_string()),
        end_date: filters.end_date.map(|d| d.format(DATE_FORMAT).to_string()),
        region_id: filters.region_id.clone(),
        area_id: filters.area_id.clone(),
        territory_id: filters.territory_id.clone(),
        dsr_id: filters.dsr_id.clone(),
        sku_ids: (!filters.sku_ids.is_empty()).then(|| filters.sku_ids.join(",")),
        channel: filters.channel.map(|c| c.code()),
        outlet_type: filters.outlet_type.clone(),
    };

    match serde_qs::to_string(&params) {
        Ok(query) => query,
        Err(e) => {
            log::warn!("failed to encode filters: {}", e);
            String::new()
        }
    }
}

/// Accepts an optional leading `?`
pub fn from_query_string(query: &str) -> Filters {
    let mut filters = Filters::default();

    for (key, value) in parse_pairs(query.trim_start_matches('?')) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "dateRange" => match DateRangeKind::from_code(value) {
                Some(kind) => filters.date_range = kind,
                None => log::debug!("ignoring dateRange={}", value),
            },
            "startDate" => filters.start_date = parse_date(value),
            "endDate" => filters.end_date = parse_date(value),
            "regionId" => filters.region_id = Some(value.to_string()),
            "areaId" => filters.area_id = Some(value.to_string()),
            "territoryId" => filters.territory_id = Some(value.to_string()),
            "dsrId" => filters.dsr_id = Some(value.to_string()),
            "skuIds" => {
                filters.sku_ids = value
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            "channel" => match Channel::from_code(value) {
                Some(channel) => filters.channel = Some(channel),
                None => log::debug!("ignoring channel={}", value),
            },
            "outletType" => filters.outlet_type = Some(value.to_string()),
            other => log::debug!("ignoring unknown query key '{}'", other),
        }
    }

    filters
}

/// Decodes pair by pair so a single malformed pair does not drop the rest.
/// A repeated key keeps its last value.
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            match serde_qs::from_str::<HashMap<String, String>>(pair) {
                Ok(map) => map.into_iter().next(),
                Err(e) => {
                    log::debug!("ignoring query pair '{}': {}", pair, e);
                    None
                }
            }
        })
        .collect()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            log::debug!("ignoring date '{}'", value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::FilterUpdate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_filters_encode_empty() {
        assert_eq!(to_query_string(&Filters::default()), "");
    }

    #[test]
    fn test_round_trip_keeps_non_default_fields() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Custom));
        filters.apply(FilterUpdate::StartDate(Some(date(2024, 1, 1))));
        filters.apply(FilterUpdate::EndDate(Some(date(2024, 1, 31))));
        filters.apply(FilterUpdate::Region(Some("R1".into())));
        filters.apply(FilterUpdate::Area(Some("A2".into())));
        filters.apply(FilterUpdate::Dsr(Some("DSR5".into())));
        filters.apply(FilterUpdate::SkuIds(vec!["SKU1".into(), "SKU3".into()]));
        filters.apply(FilterUpdate::Channel(Some(Channel::GeneralTrade)));
        filters.apply(FilterUpdate::OutletType(Some("Kirana".into())));

        let query = to_query_string(&filters);
        assert_eq!(from_query_string(&query), filters);
        assert_eq!(from_query_string(&format!("?{}", query)), filters);
    }

    #[test]
    fn test_parameter_order_and_omission() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Channel(Some(Channel::ModernTrade)));
        filters.apply(FilterUpdate::Region(Some("R2".into())));
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Last7));

        assert_eq!(
            to_query_string(&filters),
            "dateRange=last7&regionId=R2&channel=MT"
        );
    }

    #[test]
    fn test_omitted_fields_decode_to_defaults() {
        let filters = from_query_string("regionId=R3");
        assert_eq!(filters.date_range, DateRangeKind::Last30);
        assert_eq!(filters.region_id.as_deref(), Some("R3"));
        assert_eq!(filters.area_id, None);
        assert!(filters.sku_ids.is_empty());
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let filters = from_query_string(
            "?dateRange=yesterday&channel=Online&startDate=2024-13-45&foo=bar&areaId=A1",
        );
        assert_eq!(filters.date_range, DateRangeKind::Last30);
        assert_eq!(filters.channel, None);
        assert_eq!(filters.start_date, None);
        assert_eq!(filters.area_id.as_deref(), Some("A1"));
    }

    #[test]
    fn test_sku_ids_split_on_commas() {
        let filters = from_query_string("skuIds=SKU1,SKU3,,SKU9");
        assert_eq!(filters.sku_ids, vec!["SKU1", "SKU3", "SKU9"]);
        let encoded = from_query_string("skuIds=SKU2%2CSKU4");
        assert_eq!(encoded.sku_ids, vec!["SKU2", "SKU4"]);
    }

    #[test]
    fn test_channel_is_case_sensitive() {
        assert_eq!(from_query_string("channel=Horeca").channel, Some(Channel::Horeca));
        assert_eq!(from_query_string("channel=horeca").channel, None);
    }
}
