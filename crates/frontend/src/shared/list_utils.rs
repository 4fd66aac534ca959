//! Search and highlight helpers shared by the list pages

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
/// Blank queries match nothing.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    // Lower-casing may change byte lengths outside ASCII
    if lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&query) {
        let start = from + pos;
        let end = start + query.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Text with every match of `query` wrapped in a highlight span
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <span>{parts}</span> }.into_any()
}

/// Text input with a search icon and a clear button
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| value.set(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Rahul Sharma", "sha"), vec![(6, 9)]);
        assert_eq!(match_ranges("Anna Banana", "an"), vec![(0, 2), (6, 8), (8, 10)]);
        assert!(match_ranges("Rahul", "  ").is_empty());
        assert!(match_ranges("Rahul", "priya").is_empty());
    }
}
