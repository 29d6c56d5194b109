use crate::projections::p910_admin_payments::ui::list::PaymentsList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PaymentsList />
    }
}
