//! Global dashboard filters.
//!
//! `Filters` is the canonical state. It is changed through single-field
//! updates ([`FilterUpdate`]) or multi-field patches ([`FilterPatch`]); the
//! state itself never cascades, callers that change the region send a patch
//! that also clears the narrower levels.

pub mod query;
pub mod store;

pub use query::{from_query_string, to_query_string};
pub use store::{FilterStore, QueryLocation};

use crate::enums::{Channel, DateRangeKind};
use crate::shared::config::AppConfig;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub date_range: DateRangeKind,
    /// Only consulted for `DateRangeKind::Custom`, kept when leaving it
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub region_id: Option<String>,
    pub area_id: Option<String>,
    pub territory_id: Option<String>,
    pub dsr_id: Option<String>,
    pub sku_ids: Vec<String>,
    pub channel: Option<Channel>,
    /// Round-tripped through the URL, not used by any view yet
    pub outlet_type: Option<String>,
}

/// Change of exactly one filter field. `None` clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    DateRange(DateRangeKind),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Region(Option<String>),
    Area(Option<String>),
    Territory(Option<String>),
    Dsr(Option<String>),
    SkuIds(Vec<String>),
    Channel(Option<Channel>),
    OutletType(Option<String>),
}

/// Partial update touching only the fields it names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    updates: Vec<FilterUpdate>,
}

/// Inclusive calendar window, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Filters {
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::DateRange(kind) => self.date_range = kind,
            FilterUpdate::StartDate(date) => self.start_date = date,
            FilterUpdate::EndDate(date) => self.end_date = date,
            FilterUpdate::Region(id) => self.region_id = non_blank(id),
            FilterUpdate::Area(id) => self.area_id = non_blank(id),
            FilterUpdate::Territory(id) => self.territory_id = non_blank(id),
            FilterUpdate::Dsr(id) => self.dsr_id = non_blank(id),
            FilterUpdate::SkuIds(ids) => {
                self.sku_ids = ids
                    .into_iter()
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect()
            }
            FilterUpdate::Channel(channel) => self.channel = channel,
            FilterUpdate::OutletType(value) => self.outlet_type = non_blank(value),
        }
    }

    pub fn merge(&mut self, patch: FilterPatch) {
        for update in patch.updates {
            self.apply(update);
        }
    }

    /// Effective window for `today`. Rolling ranges end today; a custom range
    /// falls back to today for a missing side and keeps at most
    /// `AppConfig::MAX_WINDOW_DAYS` days before its end.
    pub fn date_range(&self, today: NaiveDate) -> DateWindow {
        match self.date_range.days() {
            Some(days) => DateWindow::new(
                today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN),
                today,
            ),
            None => DateWindow::new(
                self.start_date.unwrap_or(today),
                self.end_date.unwrap_or(today),
            )
            .clamp_len(AppConfig::MAX_WINDOW_DAYS),
        }
    }

    /// Count shown on the "Clear" button
    pub fn active_count(&self) -> usize {
        [
            self.region_id.is_some(),
            self.area_id.is_some(),
            self.territory_id.is_some(),
            self.dsr_id.is_some(),
            self.channel.is_some(),
            !self.sku_ids.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_default(&self) -> bool {
        *self == Filters::default()
    }
}

impl FilterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, update: FilterUpdate) -> Self {
        self.updates.push(update);
        self
    }

    /// Region change clears area and territory
    pub fn select_region(region_id: Option<String>) -> Self {
        Self::new()
            .with(FilterUpdate::Region(region_id))
            .with(FilterUpdate::Area(None))
            .with(FilterUpdate::Territory(None))
    }

    /// Area change clears territory
    pub fn select_area(area_id: Option<String>) -> Self {
        Self::new()
            .with(FilterUpdate::Area(area_id))
            .with(FilterUpdate::Territory(None))
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

impl From<FilterUpdate> for FilterPatch {
    fn from(update: FilterUpdate) -> Self {
        Self::new().with(update)
    }
}

impl DateWindow {
    /// Swaps reversed bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Moves `start` forward so the window spans at most `max_days`
    pub fn clamp_len(self, max_days: u64) -> Self {
        let earliest = self
            .end
            .checked_sub_days(Days::new(max_days.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start: self.start.max(earliest),
            end: self.end,
        }
    }

    /// Number of calendar days, both ends included
    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_filters() {
        let filters = Filters::default();
        assert_eq!(filters.date_range, DateRangeKind::Last30);
        assert!(filters.is_default());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_select_region_clears_narrower_levels() {
        let mut filters = Filters::default();
        filters.merge(
            FilterPatch::new()
                .with(FilterUpdate::Region(Some("R1".into())))
                .with(FilterUpdate::Area(Some("A1".into())))
                .with(FilterUpdate::Territory(Some("T1".into()))),
        );
        filters.merge(FilterPatch::select_region(Some("R2".into())));
        assert_eq!(filters.region_id.as_deref(), Some("R2"));
        assert_eq!(filters.area_id, None);
        assert_eq!(filters.territory_id, None);
    }

    #[test]
    fn test_set_filter_does_not_cascade() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Area(Some("A1".into())));
        filters.apply(FilterUpdate::Region(Some("R2".into())));
        assert_eq!(filters.area_id.as_deref(), Some("A1"));
    }

    #[test]
    fn test_patch_touches_only_named_fields() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Channel(Some(Channel::ModernTrade)));
        filters.merge(FilterPatch::select_area(Some("A3".into())));
        assert_eq!(filters.channel, Some(Channel::ModernTrade));
        assert_eq!(filters.area_id.as_deref(), Some("A3"));
    }

    #[test]
    fn test_blank_ids_clear() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Region(Some("R1".into())));
        filters.apply(FilterUpdate::Region(Some("".into())));
        assert_eq!(filters.region_id, None);
    }

    #[test]
    fn test_padded_ids_match_decoded_state() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Region(Some(" R1".into())));
        filters.apply(FilterUpdate::SkuIds(vec!["SKU1 ".into(), "  ".into()]));
        assert_eq!(filters.region_id.as_deref(), Some("R1"));
        assert_eq!(filters.sku_ids, vec!["SKU1"]);
        assert_eq!(from_query_string(&to_query_string(&filters)), filters);
    }

    #[test]
    fn test_custom_window_is_clamped() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Custom));
        filters.apply(FilterUpdate::StartDate(Some(date(1, 1, 1))));
        filters.apply(FilterUpdate::EndDate(Some(date(2024, 12, 31))));
        let window = filters.date_range(date(2024, 6, 1));
        assert_eq!(window.end, date(2024, 12, 31));
        assert_eq!(window.len_days(), AppConfig::MAX_WINDOW_DAYS as usize);
        assert_eq!(window.start, date(2024, 1, 1));

        filters.apply(FilterUpdate::StartDate(Some(date(2024, 12, 1))));
        let short = filters.date_range(date(2024, 6, 1));
        assert_eq!(short.start, date(2024, 12, 1));
        assert_eq!(short.len_days(), 31);
    }

    #[test]
    fn test_last7_window() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Last7));
        let window = filters.date_range(date(2024, 3, 5));
        assert_eq!(window.end, date(2024, 3, 5));
        assert_eq!(window.start, date(2024, 2, 27));
        assert_eq!(window.len_days(), 8);
    }

    #[test]
    fn test_window_crosses_dst_and_year_boundaries() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Last30));
        let window = filters.date_range(date(2024, 4, 10));
        assert_eq!(window.start, date(2024, 3, 11));

        filters.apply(FilterUpdate::DateRange(DateRangeKind::Last90));
        let window = filters.date_range(date(2024, 1, 15));
        assert_eq!(window.start, date(2023, 10, 17));
    }

    #[test]
    fn test_custom_window_defaults_to_today() {
        let today = date(2024, 1, 15);
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Custom));
        assert_eq!(filters.date_range(today), DateWindow::new(today, today));

        filters.apply(FilterUpdate::StartDate(Some(date(2024, 1, 1))));
        let window = filters.date_range(today);
        assert_eq!(window.start, date(2024, 1, 1));
        assert_eq!(window.end, today);
    }

    #[test]
    fn test_leaving_custom_keeps_latent_dates() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Custom));
        filters.apply(FilterUpdate::StartDate(Some(date(2024, 1, 1))));
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Last7));
        assert_eq!(filters.start_date, Some(date(2024, 1, 1)));
        assert_eq!(
            filters.date_range(date(2024, 1, 15)).start,
            date(2024, 1, 8)
        );
    }

    #[test]
    fn test_active_count() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Region(Some("R1".into())));
        filters.apply(FilterUpdate::Channel(Some(Channel::Horeca)));
        filters.apply(FilterUpdate::SkuIds(vec!["SKU1".into(), "SKU2".into()]));
        filters.apply(FilterUpdate::DateRange(DateRangeKind::Last7));
        assert_eq!(filters.active_count(), 3);
    }

    #[test]
    fn test_window_days() {
        let window = DateWindow::new(date(2024, 2, 28), date(2024, 3, 1));
        let days: Vec<NaiveDate> = window.days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
        let reversed = DateWindow::new(date(2024, 3, 1), date(2024, 2, 28));
        assert_eq!(reversed, window);
    }
}
