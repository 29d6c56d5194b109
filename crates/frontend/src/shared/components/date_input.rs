use crate::shared::date_utils::{format_canonical_date, format_picker_date, parse_canonical_date};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use leptos::prelude::*;

const EMPTY_LABEL: &str = "Select Payment Date";

/// Date picker button with a native date input and an inline clear button
///
/// The label shows the picked day as `MM-dd-yyyy`.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Called with the picked day
    on_change: Callback<NaiveDate>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let label = move || match value.get() {
        Some(date) => format_picker_date(date),
        None => EMPTY_LABEL.to_string(),
    };

    view! {
        <div class="date-input">
            <label class="date-input__button">
                {icon("calendar")}
                <span class="date-input__label" class:date-input__label--empty=move || value.get().is_none()>
                    {label}
                </span>
                <input
                    type="date"
                    class="date-input__native"
                    prop:value=move || value.get().map(format_canonical_date).unwrap_or_default()
                    on:input=move |ev| {
                        match parse_canonical_date(&event_target_value(&ev)) {
                            Some(date) => on_change.run(date),
                            None => on_clear.run(()),
                        }
                    }
                />
            </label>
            {move || value.get().is_some().then(|| view! {
                <button
                    class="clear-button"
                    title="Clear"
                    on:click=move |_| on_clear.run(())
                >
                    {icon("x-circle")}
                </button>
            })}
        </div>
    }
}
