//! Table cell for peso amounts
//!
//! ```text
//! <TableCellMoney value=record.amount() />
//!
//! // cancelled payment, drawn as "- ₱1,500.00" with a line through the amount
//! <TableCellMoney value=record.amount() struck=true />
//! ```

use super::number_format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned amount cell
///
/// Missing or unparsable amounts render as the em-dash fallback.
#[component]
pub fn TableCellMoney(
    value: Option<f64>,

    /// Prefix with "- " and strike the amount through
    #[prop(optional)]
    struck: bool,
) -> impl IntoView {
    let text = format_currency(value);

    view! {
        <TableCell class="text-right">
            <TableCellLayout>
                {if struck {
                    view! {
                        <span class="amount amount--struck">
                            "- "
                            <span style="text-decoration: line-through">{text}</span>
                        </span>
                    }.into_any()
                } else {
                    view! { <span class="amount">{text}</span> }.into_any()
                }}
            </TableCellLayout>
        </TableCell>
    }
}
