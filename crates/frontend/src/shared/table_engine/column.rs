use std::cmp::Ordering;

/// Raw value of a cell, used by sorting and by the free-text filter
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Texts the filters search in. Numbers match both their shortest form
    /// (`1500`, `1500.5`) and the two-decimal form amounts are sent in (`1500.00`)
    pub fn search_texts(&self) -> Vec<String> {
        match self {
            CellValue::Number(n) if n.is_nan() => Vec::new(),
            CellValue::Number(n) => vec![n.to_string(), format!("{n:.2}")],
            CellValue::Text(s) => vec![s.clone()],
        }
    }

    /// Default ordering: numbers numerically with NaN last, text case-insensitively,
    /// numbers before text
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => match (a.is_nan(), b.is_nan()) {
                (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (true, true) => Ordering::Equal,
            },
            (CellValue::Text(a), CellValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Rendered cell: display text plus the muted strike-through flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellContent {
    pub text: String,
    pub struck: bool,
}

impl CellContent {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            struck: false,
        }
    }

    pub fn struck(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            struck: true,
        }
    }
}

/// How a column reacts to a column filter value
pub enum ColumnFilter<T> {
    /// Column filters set on this column are ignored
    None,
    /// Case-insensitive substring match on the cell value
    IncludesString,
    /// Field-specific predicate `(row, filter_value) -> keep`
    Custom(fn(&T, &str) -> bool),
}

/// Declarative description of one table column
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub label: &'static str,
    pub accessor: fn(&T) -> CellValue,
    pub render: fn(&T) -> CellContent,
    /// Overrides [`CellValue::compare`]
    pub sort: Option<fn(&T, &T) -> Ordering>,
    pub filter: ColumnFilter<T>,
}

impl<T> ColumnDef<T> {
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn render_cell(&self, row: &T) -> CellContent {
        (self.render)(row)
    }

    /// Ascending comparison of two rows by this column
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.sort {
            Some(sort) => sort(a, b),
            None => self.value(a).compare(&self.value(b)),
        }
    }

    pub fn can_filter(&self) -> bool {
        !matches!(self.filter, ColumnFilter::None)
    }

    /// An empty filter value keeps every row
    pub fn matches_filter(&self, row: &T, filter_value: &str) -> bool {
        if filter_value.is_empty() {
            return true;
        }
        match self.filter {
            ColumnFilter::None => true,
            ColumnFilter::IncludesString => includes_string(&self.value(row), filter_value),
            ColumnFilter::Custom(predicate) => predicate(row, filter_value),
        }
    }
}

/// Case-insensitive "contains" on the cell's search text
pub fn includes_string(value: &CellValue, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    value
        .search_texts()
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

/// Looks a column up by id
pub fn find_column<'a, T>(columns: &'a [ColumnDef<T>], id: &str) -> Option<&'a ColumnDef<T>> {
    columns.iter().find(|c| c.id == id)
}
