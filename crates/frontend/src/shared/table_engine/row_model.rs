use super::column::{find_column, includes_string, ColumnDef};
use super::pagination::{page_count, page_links, PageLink};
use super::state::{SortDirection, TableState};
use std::cmp::Ordering;

/// Rows of the current page plus everything the pagination bar needs
#[derive(Debug)]
pub struct RowModel<'a, T> {
    pub rows: Vec<&'a T>,
    /// Rows left after column and global filters
    pub filtered_count: usize,
    /// Zero-based, clamped to the last existing page
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl<T> RowModel<'_, T> {
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// One-based number of the first row shown, 0 when nothing is shown
    pub fn first_row_number(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    /// One-based number of the last row shown
    pub fn last_row_number(&self) -> usize {
        self.page_index * self.page_size + self.rows.len()
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.page_count)
    }
}

/// Column filters, then the global filter, then sorting (stable)
pub fn filter_and_sort<'a, T>(
    data: &'a [T],
    columns: &[ColumnDef<T>],
    state: &TableState,
) -> Vec<&'a T> {
    let active_filters: Vec<(&ColumnDef<T>, &str)> = state
        .column_filters
        .iter()
        .filter_map(|(id, value)| {
            find_column(columns, id)
                .filter(|c| c.can_filter())
                .map(|c| (c, value.as_str()))
        })
        .collect();

    let visible: Vec<&ColumnDef<T>> = columns
        .iter()
        .filter(|c| state.is_column_visible(c.id))
        .collect();
    let global_filter = state.global_filter.as_str();

    let mut rows: Vec<&T> = data
        .iter()
        .filter(|row| {
            active_filters
                .iter()
                .all(|(column, value)| column.matches_filter(row, value))
        })
        .filter(|row| {
            global_filter.is_empty()
                || visible
                    .iter()
                    .any(|column| includes_string(&column.value(row), global_filter))
        })
        .collect();

    let sorting: Vec<(&ColumnDef<T>, SortDirection)> = state
        .sorting
        .iter()
        .filter_map(|s| find_column(columns, &s.id).map(|c| (c, s.direction)))
        .collect();

    if !sorting.is_empty() {
        rows.sort_by(|a, b| {
            sorting
                .iter()
                .map(|(column, direction)| match direction {
                    SortDirection::Asc => column.compare(a, b),
                    SortDirection::Desc => column.compare(a, b).reverse(),
                })
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
    }

    rows
}

/// Filtered, sorted and paginated view of `data`
pub fn build_row_model<'a, T>(
    data: &'a [T],
    columns: &[ColumnDef<T>],
    state: &TableState,
) -> RowModel<'a, T> {
    let filtered = filter_and_sort(data, columns, state);
    let filtered_count = filtered.len();
    let page_size = state.pagination.page_size;
    let page_count = page_count(filtered_count, page_size);
    let page_index = state
        .pagination
        .page_index
        .min(page_count.saturating_sub(1));

    let rows = filtered
        .into_iter()
        .skip(page_index * page_size)
        .take(page_size)
        .collect();

    RowModel {
        rows,
        filtered_count,
        page_index,
        page_size,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_engine::column::{CellContent, CellValue, ColumnFilter};

    #[derive(Debug, PartialEq)]
    struct Row {
        id: i64,
        city: &'static str,
        note: &'static str,
    }

    fn even_only(row: &Row, value: &str) -> bool {
        value != "even" || row.id % 2 == 0
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef {
                id: "id",
                label: "ID",
                accessor: |r| CellValue::Number(r.id as f64),
                render: |r| CellContent::plain(r.id.to_string()),
                sort: None,
                filter: ColumnFilter::Custom(even_only),
            },
            ColumnDef {
                id: "city",
                label: "City",
                accessor: |r| CellValue::Text(r.city.to_string()),
                render: |r| CellContent::plain(r.city),
                sort: None,
                filter: ColumnFilter::IncludesString,
            },
            ColumnDef {
                id: "note",
                label: "Note",
                accessor: |r| CellValue::Text(r.note.to_string()),
                render: |r| CellContent::plain(r.note),
                sort: None,
                filter: ColumnFilter::None,
            },
        ]
    }

    fn rows(n: i64) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                city: if id % 3 == 0 { "Taguig" } else { "Makati" },
                note: if id == 5 { "vip" } else { "" },
            })
            .collect()
    }

    fn ids(rows: &[&Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_state_returns_everything_in_order() {
        let data = rows(4);
        let model = build_row_model(&data, &columns(), &TableState::default());
        assert_eq!(ids(&model.rows), vec![1, 2, 3, 4]);
        assert_eq!(model.filtered_count, 4);
        assert_eq!(model.page_count, 1);
        assert!(!model.can_previous());
        assert!(!model.can_next());
    }

    #[test]
    fn test_column_filters_combine() {
        let data = rows(12);
        let mut state = TableState::default();
        state.set_column_filter("city", Some("taguig".into()));
        state.set_column_filter("id", Some("even".into()));

        let model = build_row_model(&data, &columns(), &state);
        assert_eq!(ids(&model.rows), vec![6, 12]);
    }

    #[test]
    fn test_filter_on_unfilterable_column_is_ignored() {
        let data = rows(6);
        let mut state = TableState::default();
        state.set_column_filter("note", Some("vip".into()));
        state.set_column_filter("missing", Some("x".into()));
        assert_eq!(build_row_model(&data, &columns(), &state).filtered_count, 6);
    }

    #[test]
    fn test_global_filter_skips_hidden_columns() {
        let data = rows(6);
        let mut state = TableState::default();
        state.set_global_filter("VIP");
        assert_eq!(ids(&filter_and_sort(&data, &columns(), &state)), vec![5]);

        state.toggle_column_visibility("note");
        assert!(filter_and_sort(&data, &columns(), &state).is_empty());
    }

    #[test]
    fn test_global_filter_applies_after_column_filters() {
        let data = rows(6);
        let mut state = TableState::default();
        state.set_column_filter("city", Some("Taguig".into()));
        state.set_global_filter("6");
        assert_eq!(ids(&filter_and_sort(&data, &columns(), &state)), vec![6]);
    }

    #[test]
    fn test_sort_is_stable_and_reversible() {
        let data = rows(6);
        let mut state = TableState::default();
        state.toggle_sort("city");
        assert_eq!(
            ids(&filter_and_sort(&data, &columns(), &state)),
            vec![1, 2, 4, 5, 3, 6]
        );

        state.toggle_sort("city");
        assert_eq!(
            ids(&filter_and_sort(&data, &columns(), &state)),
            vec![3, 6, 1, 2, 4, 5]
        );
    }

    #[test]
    fn test_last_page_of_25_rows() {
        let data = rows(25);
        let mut state = TableState::default();
        state.set_page_index(2);

        let model = build_row_model(&data, &columns(), &state);
        assert_eq!(model.page_count, 3);
        assert_eq!(ids(&model.rows), vec![21, 22, 23, 24, 25]);
        assert_eq!(model.first_row_number(), 21);
        assert_eq!(model.last_row_number(), 25);
        assert!(model.can_previous());
        assert!(!model.can_next());
    }

    #[test]
    fn test_page_index_is_clamped() {
        let data = rows(12);
        let mut state = TableState::default();
        state.set_page_index(9);
        let model = build_row_model(&data, &columns(), &state);
        assert_eq!(model.page_index, 1);
        assert_eq!(ids(&model.rows), vec![11, 12]);

        let empty: Vec<Row> = Vec::new();
        let model = build_row_model(&empty, &columns(), &state);
        assert_eq!(model.page_index, 0);
        assert_eq!(model.first_row_number(), 0);
        assert_eq!(model.last_row_number(), 0);
    }
}
