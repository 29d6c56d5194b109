use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Rows per page on client-side paginated lists
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: String,
    pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Sorting, filtering, visibility, selection and paging of one table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    /// Applied in order; the UI only ever keeps one entry
    pub sorting: Vec<ColumnSort>,
    /// Column id → filter value; empty values are never stored
    pub column_filters: BTreeMap<String, String>,
    /// Live free-text filter over all visible columns
    pub global_filter: String,
    pub hidden_columns: BTreeSet<String>,
    pub selected_rows: BTreeSet<String>,
    pub pagination: Pagination,
}

impl TableState {
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|s| s.id == column_id)
            .map(|s| s.direction)
    }

    /// unsorted → ascending → descending → unsorted; replaces sorting on other columns
    pub fn toggle_sort(&mut self, column_id: &str) {
        let next = match self.sort_direction(column_id) {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        };
        self.sorting = next
            .map(|direction| ColumnSort {
                id: column_id.to_string(),
                direction,
            })
            .into_iter()
            .collect();
    }

    pub fn column_filter(&self, column_id: &str) -> Option<&str> {
        self.column_filters.get(column_id).map(String::as_str)
    }

    /// `None` or an empty value removes the filter
    pub fn set_column_filter(&mut self, column_id: &str, value: Option<String>) {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => {
                self.column_filters.insert(column_id.to_string(), v);
            }
            None => {
                self.column_filters.remove(column_id);
            }
        }
    }

    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        self.global_filter = value.into();
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        !self.hidden_columns.contains(column_id)
    }

    pub fn toggle_column_visibility(&mut self, column_id: &str) {
        if !self.hidden_columns.remove(column_id) {
            self.hidden_columns.insert(column_id.to_string());
        }
    }

    pub fn is_row_selected(&self, row_id: &str) -> bool {
        self.selected_rows.contains(row_id)
    }

    pub fn toggle_row_selection(&mut self, row_id: &str) {
        if !self.selected_rows.remove(row_id) {
            self.selected_rows.insert(row_id.to_string());
        }
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.pagination.page_index = page_index;
    }

    pub fn reset_page_index(&mut self) {
        self.pagination.page_index = 0;
    }
}
