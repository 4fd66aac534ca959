//! Reactive access to the records in view.
//!
//! Reads the session and the filters, so any view calling [`ScopeReader::with`]
//! re-renders when either changes.

use crate::shared::date_utils::today;
use crate::shared::filters::use_filters;
use crate::system::auth::context::{use_auth, AuthState};
use contracts::dashboards::{resolve_scope, selectable_regions, DataScope};
use contracts::domain::a001_hierarchy::Region;
use contracts::shared::filters::{DateWindow, Filters};
use contracts::shared::mock_data::MOCK;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ScopeReader {
    auth: ReadSignal<AuthState>,
    filters: RwSignal<Filters>,
}

pub fn use_scope() -> ScopeReader {
    let (auth, _) = use_auth();
    ScopeReader {
        auth,
        filters: use_filters().filters,
    }
}

impl ScopeReader {
    pub fn with<R>(&self, f: impl FnOnce(&DataScope<'static>) -> R) -> R {
        self.auth.with(|auth| {
            self.filters.with(|filters| {
                let scope = resolve_scope(auth.session.as_ref(), filters, &MOCK);
                f(&scope)
            })
        })
    }

    /// Regions the signed-in user may pick, ignoring the current filters
    pub fn regions(&self) -> Vec<&'static Region> {
        self.auth
            .with(|auth| selectable_regions(auth.session.as_ref(), &MOCK))
    }

    pub fn window(&self) -> DateWindow {
        self.filters.with(|f| f.date_range(today()))
    }
}
