use super::query::{from_query_string, to_query_string};
use super::{DateWindow, FilterPatch, FilterUpdate, Filters};
use chrono::NaiveDate;

/// Where the filter query lives. The browser adapter reads
/// `location.search` and writes through `history.replaceState`.
pub trait QueryLocation {
    /// Current query, with or without the leading `?`
    fn query(&self) -> String;
    /// Replace (never push) the current query. `query` has no leading `?`
    /// and may be empty.
    fn replace_query(&mut self, query: &str);
}

/// Filter state mirrored into a [`QueryLocation`].
///
/// Every change is applied to the state first, then the whole non-default
/// query is written back. The last change wins.
pub struct FilterStore<L: QueryLocation> {
    location: L,
    filters: Filters,
}

impl<L: QueryLocation> FilterStore<L> {
    /// Parses the location's query once
    pub fn mount(location: L) -> Self {
        let filters = from_query_string(&location.query());
        log::debug!("filters mounted: {:?}", filters);
        Self { location, filters }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_filter(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        self.write_back();
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        self.write_back();
    }

    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.write_back();
    }

    /// Re-reads the query after the location changed underneath the store
    /// (history navigation). Does not write back.
    pub fn reload(&mut self) -> &Filters {
        self.filters = from_query_string(&self.location.query());
        &self.filters
    }

    pub fn date_range(&self, today: NaiveDate) -> DateWindow {
        self.filters.date_range(today)
    }

    pub fn query_string(&self) -> String {
        to_query_string(&self.filters)
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    fn write_back(&mut self) {
        let query = to_query_string(&self.filters);
        self.location.replace_query(&query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Channel, DateRangeKind};

    #[derive(Default)]
    struct MemoryLocation {
        query: String,
        replaced: usize,
    }

    impl QueryLocation for MemoryLocation {
        fn query(&self) -> String {
            self.query.clone()
        }

        fn replace_query(&mut self, query: &str) {
            self.query = query.to_string();
            self.replaced += 1;
        }
    }

    fn at(query: &str) -> MemoryLocation {
        MemoryLocation {
            query: query.to_string(),
            replaced: 0,
        }
    }

    #[test]
    fn test_mount_parses_query_without_writing() {
        let store = FilterStore::mount(at("?regionId=R1&channel=GT"));
        assert_eq!(store.filters().region_id.as_deref(), Some("R1"));
        assert_eq!(store.filters().channel, Some(Channel::GeneralTrade));
        assert_eq!(store.location().replaced, 0);
    }

    #[test]
    fn test_set_filter_writes_full_query() {
        let mut store = FilterStore::mount(at("regionId=R1"));
        store.set_filter(FilterUpdate::DateRange(DateRangeKind::Last90));
        assert_eq!(store.location().query, "dateRange=last90&regionId=R1");
        assert_eq!(store.location().replaced, 1);
    }

    #[test]
    fn test_region_patch_clears_area_in_url() {
        let mut store = FilterStore::mount(at("regionId=R1&areaId=A1&territoryId=T1"));
        store.set_filters(FilterPatch::select_region(Some("R2".into())));
        assert_eq!(store.location().query, "regionId=R2");
    }

    #[test]
    fn test_reset_clears_query() {
        let mut store = FilterStore::mount(at("dateRange=last7&dsrId=DSR2"));
        store.reset_filters();
        assert!(store.filters().is_default());
        assert_eq!(store.location().query, "");
    }

    #[test]
    fn test_last_writer_wins() {
        let mut store = FilterStore::mount(MemoryLocation::default());
        store.set_filter(FilterUpdate::Region(Some("R1".into())));
        store.set_filter(FilterUpdate::Region(Some("R3".into())));
        assert_eq!(store.filters().region_id.as_deref(), Some("R3"));
        assert_eq!(store.location().query, "regionId=R3");
    }

    #[test]
    fn test_reload_follows_location() {
        let mut store = FilterStore::mount(MemoryLocation::default());
        store.location.query = "areaId=A4".to_string();
        assert_eq!(store.reload().area_id.as_deref(), Some("A4"));
        assert_eq!(store.location().replaced, 0);
    }
}
