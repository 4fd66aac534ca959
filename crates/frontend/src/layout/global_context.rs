use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Shell state shared by the whole app: current route and sidebar visibility
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::from_path(&current_pathname())),
            left_open: RwSignal::new(true),
        }
    }

    /// Follows back/forward navigation. Call once.
    pub fn init_router_integration(&self) {
        let this = *self;
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let route = AppRoute::from_path(&current_pathname());
            log::debug!("popstate -> {:?}", route);
            this.route.set(route);
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

    /// Pushes a history entry for `route`, keeping the filter query
    pub fn navigate(&self, route: AppRoute) {
        if self.route.get_untracked() == route {
            return;
        }
        self.write_history(route, false);
        self.route.set(route);
    }

    /// Replaces the current history entry, used for redirects
    pub fn redirect(&self, route: AppRoute) {
        log::debug!("redirect -> {:?}", route);
        self.write_history(route, true);
        self.route.set(route);
    }

    fn write_history(&self, route: AppRoute, replace: bool) {
        let new_url = format!("{}{}", route.path(), current_search());
        let Some(w) = window() else {
            return;
        };
        let Ok(history) = w.history() else {
            return;
        };
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(&new_url))
        };
        if let Err(e) = result {
            log::warn!("failed to update history: {:?}", e);
        }
    }

    pub fn current_path(&self) -> &'static str {
        self.route.get().path()
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
