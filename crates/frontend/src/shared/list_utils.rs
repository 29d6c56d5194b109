/// Shared helpers for list pages (search box, sort indicators)
use crate::shared::table_engine::SortDirection;
use leptos::prelude::*;

/// Sort indicator for a header: `⇅` unsorted, `▲` ascending, `▼` descending
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => " ⇅",
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
    }
}

/// CSS class of the indicator span
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "sort-icon",
        Some(_) => "sort-icon sort-icon--active",
    }
}

/// Search box that reports every keystroke, with an inline clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every input event
    #[prop(into)]
    on_change: Callback<String>,
    /// Called when the clear button is clicked
    #[prop(into)]
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="clear-button"
                    title="Clear"
                    on:click=move |_| on_clear.run(())
                >
                    {crate::shared::icons::icon("x-circle")}
                </button>
            })}
        </div>
    }
}
