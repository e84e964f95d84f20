//! Transport-neutral query descriptions.
//!
//! A query is built by the caller and handed to a [`QueryClient`]
//! implementation, which renders it into whatever its backend understands.
//!
//! [`QueryClient`]: crate::QueryClient

use serde_json::Value;

/// A filtered, ordered read of named columns from one logical table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectQuery {
    table: String,
    columns: Vec<String>,
    filters: Vec<(String, String)>,
    order_desc: Option<String>,
}

impl SelectQuery {
    /// Start a select against `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            filters: Vec::new(),
            order_desc: None,
        }
    }

    /// Restrict the result to the named columns. An empty column list means
    /// every column.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| (*c).to_owned()).collect();
        self
    }

    /// Keep only rows where `column` equals `value` exactly.
    pub fn filter_eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    /// Order the result by `column`, newest/largest first.
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order_desc = Some(column.into());
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn selected_columns(&self) -> &[String] {
        &self.columns
    }

    pub fn eq_filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn descending_order(&self) -> Option<&str> {
        self.order_desc.as_deref()
    }
}

/// A filtered update setting named columns on one logical table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateQuery {
    table: String,
    set: serde_json::Map<String, Value>,
    filters: Vec<(String, String)>,
}

impl UpdateQuery {
    /// Start an update against `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            set: serde_json::Map::new(),
            filters: Vec::new(),
        }
    }

    /// Set `column` to `value` on every matched row.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set.insert(column.into(), value.into());
        self
    }

    /// Match only rows where `column` equals `value` exactly.
    pub fn filter_eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn set_columns(&self) -> &serde_json::Map<String, Value> {
        &self.set
    }

    pub fn eq_filters(&self) -> &[(String, String)] {
        &self.filters
    }

    /// Whether the update names a given column in its set list.
    pub fn sets_column(&self, column: &str) -> bool {
        self.set.contains_key(column)
    }
}
