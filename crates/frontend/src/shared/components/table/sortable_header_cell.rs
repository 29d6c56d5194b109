//! Sortable table header cell
//!
//! ```text
//! <SortableHeaderCell
//!     label="Payment Date"
//!     column_id="payment_date"
//!     direction=Signal::derive(move || state.with(|s| s.table.sort_direction("payment_date")))
//!     on_sort=Callback::new(move |id| dispatch(ListAction::ToggleSort(id)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::table_engine::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Header cell whose click cycles the column through unsorted / ascending / descending
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column id passed back to `on_sort`
    column_id: &'static str,

    /// Current sort direction of this column
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <button
                class="table__sortable-header"
                title="Sort"
                on:click=move |_| on_sort.run(column_id)
            >
                {label}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </button>
        </TableHeaderCell>
    }
}
