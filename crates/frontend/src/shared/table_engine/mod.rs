//! Client-side table engine: filtering, sorting, selection and pagination
//! over a fully loaded list of rows.
//!
//! Pipeline of [`build_row_model`]: column filters, then the global
//! free-text filter over visible columns, then sorting, then the page slice.
//! The engine knows nothing about Leptos; list pages keep a [`TableState`]
//! inside their own state signal and describe their columns with a static
//! slice of [`ColumnDef`].

pub mod column;
pub mod pagination;
pub mod row_model;
pub mod state;

pub use column::{CellContent, CellValue, ColumnDef, ColumnFilter};
pub use pagination::{page_links, PageLink, VISIBLE_PAGE_LINKS};
pub use row_model::{build_row_model, filter_and_sort, RowModel};
pub use state::{ColumnSort, Pagination, SortDirection, TableState, DEFAULT_PAGE_SIZE};
