use super::columns::{COL_LOCATION_NAME, COL_PAYMENT_DATE, PAYMENT_COLUMNS};
use crate::shared::date_utils::format_canonical_date;
use crate::shared::table_engine::{build_row_model, RowModel, TableState};
use chrono::NaiveDate;
use contracts::projections::p910_admin_payments::aggregate::PaymentTotals;
use contracts::projections::p910_admin_payments::dto::PaymentRecord;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Message shown instead of the table body when the fetch fails
pub const LOAD_ERROR_MESSAGE: &str = "No payments added.";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Toolbar values not yet applied to the table (committed by Search)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDraft {
    pub payment_date: Option<NaiveDate>,
    pub location_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsListState {
    pub load_state: LoadState,
    pub records: Vec<PaymentRecord>,
    pub totals: PaymentTotals,
    /// Location menu entries, in first-seen order
    pub locations: Vec<String>,
    pub draft: FilterDraft,
    pub table: TableState,
}

/// Every user or network event the list page reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    Loaded(Vec<PaymentRecord>),
    LoadFailed(String),
    SetSearch(String),
    ClearSearch,
    SelectDate(NaiveDate),
    ClearDate,
    SelectLocation(String),
    ClearLocation,
    /// Commits the draft date and location into the column filters
    Search,
    ToggleSort(&'static str),
    GoToPage(usize),
    PreviousPage,
    NextPage,
    ToggleRowSelection(String),
    ToggleColumnVisibility(&'static str),
}

impl PaymentsListState {
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Loaded(records) => {
                self.totals = PaymentTotals::from_records(&records);
                self.locations = distinct_locations(&records);
                self.records = records;
                self.load_state = LoadState::Loaded;
                self.table.reset_page_index();
            }
            ListAction::LoadFailed(message) => {
                self.load_state = LoadState::Failed(message);
            }
            ListAction::SetSearch(text) => {
                self.table.set_global_filter(text);
                self.table.reset_page_index();
            }
            ListAction::ClearSearch => {
                self.table.set_global_filter(String::new());
                self.table.reset_page_index();
            }
            ListAction::SelectDate(date) => {
                self.draft.payment_date = Some(date);
            }
            ListAction::ClearDate => {
                self.draft.payment_date = None;
                self.table.set_column_filter(COL_PAYMENT_DATE, None);
                self.table.reset_page_index();
            }
            ListAction::SelectLocation(name) => {
                self.draft.location_name = Some(name);
            }
            ListAction::ClearLocation => {
                self.draft.location_name = None;
                self.table.set_column_filter(COL_LOCATION_NAME, None);
                self.table.reset_page_index();
            }
            ListAction::Search => {
                let location = self.draft.location_name.clone();
                let date = self.draft.payment_date.map(format_canonical_date);
                self.table.set_column_filter(COL_LOCATION_NAME, location);
                self.table.set_column_filter(COL_PAYMENT_DATE, date);
                self.table.reset_page_index();
            }
            ListAction::ToggleSort(column_id) => {
                self.table.toggle_sort(column_id);
            }
            ListAction::GoToPage(page_index) => {
                let last = self.row_model().page_count.saturating_sub(1);
                self.table.set_page_index(page_index.min(last));
            }
            ListAction::PreviousPage => {
                let current = self.row_model().page_index;
                self.table.set_page_index(current.saturating_sub(1));
            }
            ListAction::NextPage => {
                let model = self.row_model();
                if model.can_next() {
                    let next = model.page_index + 1;
                    self.table.set_page_index(next);
                }
            }
            ListAction::ToggleRowSelection(row_id) => {
                self.table.toggle_row_selection(&row_id);
            }
            ListAction::ToggleColumnVisibility(column_id) => {
                self.table.toggle_column_visibility(column_id);
            }
        }
    }

    pub fn row_model(&self) -> RowModel<'_, PaymentRecord> {
        build_row_model(&self.records, &PAYMENT_COLUMNS, &self.table)
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }
}

/// Deduplicated location names in first-seen order
pub fn distinct_locations(records: &[PaymentRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        if !names.contains(&record.location_name) {
            names.push(record.location_name.clone());
        }
    }
    names
}

pub fn create_state() -> RwSignal<PaymentsListState> {
    RwSignal::new(PaymentsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::order_status::OrderStatus;

    fn record(id: i64, location: &str, payment_date: &str, amount: f64) -> PaymentRecord {
        PaymentRecord {
            transaction_id: id,
            room_id: id,
            initial: "R".to_string(),
            payment_amount: amount,
            order_status: OrderStatus::Approved,
            location_name: location.to_string(),
            customer_name: format!("Customer {id}"),
            payment_date: payment_date.to_string(),
        }
    }

    fn loaded(records: Vec<PaymentRecord>) -> PaymentsListState {
        let mut state = PaymentsListState::default();
        state.apply(ListAction::Loaded(records));
        state
    }

    fn visible_ids(state: &PaymentsListState) -> Vec<i64> {
        state
            .row_model()
            .rows
            .iter()
            .map(|r| r.transaction_id)
            .collect()
    }

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn sample() -> Vec<PaymentRecord> {
        vec![
            record(1, "Makati", "03-15-2024 09:00 AM", 100.0),
            record(2, "Taguig", "03-15-2024 10:00 AM", 200.0),
            record(3, "Makati", "03-16-2024 09:00 AM", 300.0),
            record(4, "Pasig", "03-15-2024 11:00 AM", 400.0),
        ]
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = PaymentsListState::default();
        assert!(state.is_loading());
        assert_eq!(state.row_model().filtered_count, 0);
    }

    #[test]
    fn test_loaded_derives_totals_and_locations() {
        let state = loaded(sample());
        assert_eq!(state.load_state, LoadState::Loaded);
        assert_eq!(state.totals.total_received, 1000.0);
        assert_eq!(state.locations, vec!["Makati", "Taguig", "Pasig"]);
    }

    #[test]
    fn test_load_failed_keeps_message() {
        let mut state = PaymentsListState::default();
        state.apply(ListAction::LoadFailed(LOAD_ERROR_MESSAGE.to_string()));
        assert_eq!(
            state.load_state,
            LoadState::Failed("No payments added.".to_string())
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn test_draft_filters_apply_only_on_search() {
        let mut state = loaded(sample());
        state.apply(ListAction::SelectLocation("Makati".into()));
        state.apply(ListAction::SelectDate(march(15)));
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4]);

        state.apply(ListAction::Search);
        assert_eq!(visible_ids(&state), vec![1]);
        assert_eq!(state.table.column_filter(COL_PAYMENT_DATE), Some("2024-03-15"));
    }

    #[test]
    fn test_search_text_is_live() {
        let mut state = loaded(sample());
        state.apply(ListAction::SetSearch("taguig".into()));
        assert_eq!(visible_ids(&state), vec![2]);

        state.apply(ListAction::ClearSearch);
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_location_restores_date_filtered_rows() {
        let mut state = loaded(sample());
        state.apply(ListAction::SelectLocation("Makati".into()));
        state.apply(ListAction::SelectDate(march(15)));
        state.apply(ListAction::Search);
        assert_eq!(visible_ids(&state), vec![1]);

        state.apply(ListAction::ClearLocation);
        assert_eq!(state.draft.location_name, None);
        assert_eq!(visible_ids(&state), vec![1, 2, 4]);
    }

    #[test]
    fn test_clear_date_keeps_location_filter() {
        let mut state = loaded(sample());
        state.apply(ListAction::SelectLocation("Makati".into()));
        state.apply(ListAction::SelectDate(march(15)));
        state.apply(ListAction::Search);

        state.apply(ListAction::ClearDate);
        assert_eq!(state.draft.payment_date, None);
        assert_eq!(visible_ids(&state), vec![1, 3]);
    }

    #[test]
    fn test_pagination_over_25_rows() {
        let records = (1..=25)
            .map(|id| record(id, "Makati", "03-15-2024 09:00 AM", 10.0))
            .collect();
        let mut state = loaded(records);

        state.apply(ListAction::PreviousPage);
        assert_eq!(state.row_model().page_index, 0);

        state.apply(ListAction::NextPage);
        state.apply(ListAction::NextPage);
        let model = state.row_model();
        assert_eq!(model.page_index, 2);
        assert_eq!(
            model.rows.iter().map(|r| r.transaction_id).collect::<Vec<_>>(),
            vec![21, 22, 23, 24, 25]
        );
        assert!(!model.can_next());

        state.apply(ListAction::NextPage);
        assert_eq!(state.row_model().page_index, 2);

        state.apply(ListAction::GoToPage(0));
        assert_eq!(state.row_model().page_index, 0);
        state.apply(ListAction::GoToPage(99));
        assert_eq!(state.row_model().page_index, 2);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let records = (1..=25)
            .map(|id| record(id, "Makati", "03-15-2024 09:00 AM", 10.0))
            .collect();
        let mut state = loaded(records);
        state.apply(ListAction::GoToPage(2));

        state.apply(ListAction::SetSearch("2".into()));
        assert_eq!(state.table.pagination.page_index, 0);

        state.apply(ListAction::GoToPage(1));
        state.apply(ListAction::Search);
        assert_eq!(state.table.pagination.page_index, 0);
    }

    #[test]
    fn test_sort_and_selection_actions() {
        let mut state = loaded(sample());
        state.apply(ListAction::ToggleSort("payment_amount"));
        state.apply(ListAction::ToggleSort("payment_amount"));
        assert_eq!(visible_ids(&state), vec![4, 3, 2, 1]);

        state.apply(ListAction::ToggleRowSelection("3".into()));
        assert!(state.table.is_row_selected("3"));

        state.apply(ListAction::ToggleColumnVisibility("customer_name"));
        assert!(!state.table.is_column_visible("customer_name"));
    }

    #[test]
    fn test_totals_ignore_filters() {
        let mut state = loaded(sample());
        state.apply(ListAction::SelectLocation("Pasig".into()));
        state.apply(ListAction::Search);
        assert_eq!(visible_ids(&state), vec![4]);
        assert_eq!(state.totals.total_received, 1000.0);
    }
}
