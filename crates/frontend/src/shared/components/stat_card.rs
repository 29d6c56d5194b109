use crate::shared::components::table::format_currency;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Card showing one peso total
///
/// While `loading` is set the value is replaced by a pulsing placeholder.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<f64>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || if loading.get() {
                        view! { <span class="stat-card__placeholder" aria-busy="true"></span> }.into_any()
                    } else {
                        view! { <span>{format_currency(Some(value.get()))}</span> }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
