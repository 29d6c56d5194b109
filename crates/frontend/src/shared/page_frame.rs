//! PageFrame: root wrapper of the widget page.
//!
//! ```text
//! <PageFrame page_id="p910_admin_payments--list" category=PAGE_CAT_LIST>
//!     <div class="page__header">...</div>
//!     <div class="page__content">...</div>
//! </PageFrame>
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the base `page` class on the root element.
#[component]
pub fn PageFrame(
    /// HTML id in format `{projection}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id {:?} is not in {{projection}}--{{category}} format", page_id);
    }

    let base_class = match category {
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
