use contracts::shared::filters::QueryLocation;
use wasm_bindgen::JsValue;
use web_sys::window;

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `location.search`, written back with `history.replaceState`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl QueryLocation for BrowserLocation {
    fn query(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_query(&mut self, query: &str) {
        let path = current_pathname();
        let new_url = if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, query)
        };

        let current = format!("{}{}", current_pathname(), self.query());
        if current == new_url {
            return;
        }

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                    log::warn!("failed to update query string: {:?}", e);
                }
            }
        }
    }
}
