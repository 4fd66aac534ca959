//! Reactive wrapper around the filter store.
//!
//! The store owns the canonical `Filters` and mirrors them into the URL; the
//! signal republishes the store's state so views re-render after each change.

pub mod location;

pub use location::BrowserLocation;

use crate::shared::date_utils::today;
use contracts::shared::filters::{DateWindow, FilterPatch, FilterStore, FilterUpdate, Filters};
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct FiltersContext {
    store: StoredValue<FilterStore<BrowserLocation>>,
    pub filters: RwSignal<Filters>,
}

impl FiltersContext {
    pub fn new() -> Self {
        let store = FilterStore::mount(BrowserLocation);
        let filters = RwSignal::new(store.filters().clone());
        Self {
            store: StoredValue::new(store),
            filters,
        }
    }

    /// Re-reads the query after back/forward navigation
    pub fn init_history_sync(&self) {
        let this = *self;
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            this.sync(|store| {
                store.reload();
            });
        });
        if let Some(w) = window() {
            if let Err(e) = w
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
            {
                log::warn!("failed to listen for popstate: {:?}", e);
            }
        }
        on_popstate.forget();
    }

    pub fn set_filter(&self, update: FilterUpdate) {
        self.sync(move |store| store.set_filter(update));
    }

    pub fn set_filters(&self, patch: FilterPatch) {
        self.sync(move |store| store.set_filters(patch));
    }

    pub fn reset_filters(&self) {
        self.sync(|store| store.reset_filters());
    }

    /// Effective window for the current filters, relative to today
    pub fn date_window(&self) -> DateWindow {
        self.filters.with(|f| f.date_range(today()))
    }

    pub fn query_string(&self) -> String {
        self.store
            .try_with_value(|store| store.query_string())
            .unwrap_or_default()
    }

    fn sync(&self, change: impl FnOnce(&mut FilterStore<BrowserLocation>)) {
        let next = self.store.try_update_value(|store| {
            change(store);
            store.filters().clone()
        });
        if let Some(filters) = next {
            self.filters.set(filters);
        }
    }
}

pub fn use_filters() -> FiltersContext {
    use_context::<FiltersContext>().expect("FiltersContext not found")
}
