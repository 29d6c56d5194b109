//! Page category constants.
//!
//! Every widget page root declares:
//!   - HTML `id` in the format `{projection}--{category}` (e.g. `"p910_admin_payments--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Free-form page exempt from the standard header/content layout.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{projection}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
