pub mod columns;
pub mod state;

use crate::projections::p910_admin_payments::api::fetch_payments;
use crate::shared::api_utils::WidgetConfig;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use columns::{COL_PAYMENT_AMOUNT, PAYMENT_COLUMNS};
use contracts::projections::p910_admin_payments::dto::PaymentRecord;
use leptos::logging::log;
use leptos::prelude::*;
use state::{create_state, ListAction, LoadState, LOAD_ERROR_MESSAGE};
use thaw::*;

const LOCATION_PLACEHOLDER: &str = "Location Name";
const EMPTY_RESULT_MESSAGE: &str = "No result.";

fn row_id(record: &PaymentRecord) -> String {
    record.transaction_id.to_string()
}

#[component]
pub fn PaymentsList() -> impl IntoView {
    let state = create_state();
    let dispatch = move |action: ListAction| state.update(|s| s.apply(action));

    // Load payments on mount
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = match WidgetConfig::from_document() {
                Ok(config) => fetch_payments(&config).await,
                Err(e) => Err(e.into()),
            };
            match result {
                Ok(records) => {
                    log::info!("loaded {} payments", records.len());
                    dispatch(ListAction::Loaded(records));
                }
                Err(e) => {
                    log::error!("failed to load payments: {}", e);
                    dispatch(ListAction::LoadFailed(LOAD_ERROR_MESSAGE.to_string()));
                }
            }
        });
    });

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading()));

    let visible_columns = move || {
        state.with(|s| {
            PAYMENT_COLUMNS
                .iter()
                .filter(|c| s.table.is_column_visible(c.id))
                .collect::<Vec<_>>()
        })
    };
    let colspan = move || visible_columns().len().max(1).to_string();

    let on_sort = Callback::new(move |column_id: &'static str| {
        dispatch(ListAction::ToggleSort(column_id));
    });

    let body_message = move |text: String| {
        view! {
            <TableRow>
                <TableCell attr:colspan=colspan>
                    <TableCellLayout>
                        <span class="table__message">{text}</span>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
        .into_any()
    };

    let render_row = move |record: PaymentRecord| {
        let id = row_id(&record);
        let id_for_state = id.clone();
        let is_selected = Signal::derive(move || state.with(|s| s.table.is_row_selected(&id_for_state)));

        view! {
            <TableRow
                attr:data-state=move || is_selected.get().then_some("selected")
                attr:style="cursor: pointer;"
                class:table__row--selected=is_selected
                on:click=move |_| dispatch(ListAction::ToggleRowSelection(id.clone()))
            >
                {visible_columns()
                    .into_iter()
                    .map(|column| {
                        let content = column.render_cell(&record);
                        if column.id == COL_PAYMENT_AMOUNT {
                            view! { <TableCellMoney value=record.amount() struck=content.struck /> }
                                .into_any()
                        } else {
                            view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>{content.text}</TableCellLayout>
                                </TableCell>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()}
            </TableRow>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="p910_admin_payments--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Payments"</h1>
                </div>
                <div class="page__header-right stat-cards">
                    <StatCard
                        label="Total Payments Received"
                        icon_name="chevron-down"
                        value=Signal::derive(move || state.with(|s| s.totals.total_received))
                        loading=is_loading
                    />
                    <StatCard
                        label="Total Sales"
                        icon_name="chevron-right"
                        value=Signal::derive(move || state.with(|s| s.totals.total_sales))
                        loading=is_loading
                    />
                </div>
            </div>

            <div class="page__content">
                <h2 class="page__subtitle">"Payments list"</h2>

                <div class="filter-panel">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.table.global_filter.clone()))
                        on_change=Callback::new(move |text: String| dispatch(ListAction::SetSearch(text)))
                        on_clear=Callback::new(move |_| dispatch(ListAction::ClearSearch))
                        placeholder="Search".to_string()
                    />

                    <DateInput
                        value=Signal::derive(move || state.with(|s| s.draft.payment_date))
                        on_change=Callback::new(move |date| dispatch(ListAction::SelectDate(date)))
                        on_clear=Callback::new(move |_| dispatch(ListAction::ClearDate))
                    />

                    <div class="location-select">
                        <select
                            class="location-select__field"
                            prop:value=move || state.with(|s| s.draft.location_name.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let name = event_target_value(&ev);
                                if name.is_empty() {
                                    dispatch(ListAction::ClearLocation);
                                } else {
                                    dispatch(ListAction::SelectLocation(name));
                                }
                            }
                        >
                            <option value="" disabled=true>{LOCATION_PLACEHOLDER}</option>
                            {move || {
                                state.with(|s| s.locations.clone())
                                    .into_iter()
                                    .map(|name| {
                                        let value = name.clone();
                                        view! { <option value=value>{name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        {move || state.with(|s| s.draft.location_name.is_some()).then(|| view! {
                            <button
                                class="clear-button"
                                title="Clear"
                                on:click=move |_| dispatch(ListAction::ClearLocation)
                            >
                                {crate::shared::icons::icon("x-circle")}
                            </button>
                        })}
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            state.with_untracked(|s| {
                                log!("search: date={:?} location={:?}", s.draft.payment_date, s.draft.location_name)
                            });
                            dispatch(ListAction::Search);
                        }
                        disabled=is_loading
                    >
                        "Search"
                    </Button>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || {
                                    visible_columns()
                                        .into_iter()
                                        .map(|column| {
                                            let id = column.id;
                                            view! {
                                                <SortableHeaderCell
                                                    label=column.label
                                                    column_id=id
                                                    direction=Signal::derive(move || state.with(|s| s.table.sort_direction(id)))
                                                    on_sort=on_sort
                                                />
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let load_state = state.with(|s| s.load_state.clone());
                                match load_state {
                                    LoadState::Loading => view! {
                                        <TableRow>
                                            <TableCell attr:colspan=colspan>
                                                <TableCellLayout>
                                                    <Spinner />
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any(),
                                    LoadState::Failed(message) => body_message(message),
                                    LoadState::Loaded => {
                                        let rows: Vec<PaymentRecord> = state.with(|s| {
                                            s.row_model().rows.into_iter().cloned().collect()
                                        });
                                        if rows.is_empty() {
                                            return body_message(EMPTY_RESULT_MESSAGE.to_string());
                                        }
                                        rows.into_iter().map(render_row).collect_view().into_any()
                                    }
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.row_model().page_index))
                    links=Signal::derive(move || state.with(|s| s.row_model().page_links()))
                    row_range=Signal::derive(move || state.with(|s| {
                        let model = s.row_model();
                        (model.first_row_number(), model.last_row_number())
                    }))
                    total_count=Signal::derive(move || state.with(|s| s.row_model().filtered_count))
                    can_previous=Signal::derive(move || state.with(|s| s.row_model().can_previous()))
                    can_next=Signal::derive(move || state.with(|s| s.row_model().can_next()))
                    on_page_change=Callback::new(move |index| dispatch(ListAction::GoToPage(index)))
                    on_previous=Callback::new(move |_| dispatch(ListAction::PreviousPage))
                    on_next=Callback::new(move |_| dispatch(ListAction::NextPage))
                />
            </div>
        </PageFrame>
    }
}
