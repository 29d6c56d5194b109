use crate::shared::icons::icon;
use crate::shared::table_engine::PageLink;
use leptos::prelude::*;

/// Previous / numbered links / next, plus the "Showing x - y of n" summary
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Links to render, see `table_engine::page_links`
    #[prop(into)]
    links: Signal<Vec<PageLink>>,

    /// 1-based row numbers shown on the current page, `(0, 0)` when empty
    #[prop(into)]
    row_range: Signal<(usize, usize)>,

    /// Row count after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    can_previous: Signal<bool>,

    #[prop(into)]
    can_next: Signal<bool>,

    on_page_change: Callback<usize>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let (first, last) = row_range.get();
                    format!("Showing {} - {} of {}", first, last, total_count.get())
                }}
            </span>
            <nav class="pagination-links" aria-label="pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_previous.run(())
                    disabled=move || !can_previous.get()
                    title="Previous"
                >
                    {icon("chevron-left")}
                    <span>"Previous"</span>
                </button>
                {move || {
                    links
                        .get()
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(index) => {
                                let is_active = move || current_page.get() == index;
                                view! {
                                    <button
                                        class="pagination-btn"
                                        class:pagination-btn--active=is_active
                                        aria-current=move || is_active().then_some("page")
                                        on:click=move |_| on_page_change.run(index)
                                    >
                                        {(index + 1).to_string()}
                                    </button>
                                }
                                .into_any()
                            }
                            PageLink::Ellipsis => {
                                view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || !can_next.get()
                    title="Next"
                >
                    <span>"Next"</span>
                    {icon("chevron-right")}
                </button>
            </nav>
        </div>
    }
}
