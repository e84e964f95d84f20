//! In-process implementation of the query seam.
//!
//! Backs tests and local development runs with plain JSON rows held in a
//! mutex-protected table map. Select semantics mirror the REST dialect:
//! equality filters compare the stringified field value, descending order
//! sorts lexicographically (ISO dates and RFC 3339 timestamps order
//! correctly under this), and column selection projects each row.

use crate::client::{QueryClient, QueryError, QueryResult};
use crate::{SelectQuery, UpdateQuery};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Query client over in-memory tables.
#[derive(Default)]
pub struct MemoryQueryClient {
    tables: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryQueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to `table`, creating the table if needed.
    pub fn insert_row(&self, table: &str, row: Value) {
        let mut tables = self.tables.lock().expect("table lock");
        tables.entry(table.to_owned()).or_default().push(row);
    }

    /// Snapshot the current rows of `table`. Empty if the table is unknown.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        let tables = self.tables.lock().expect("table lock");
        tables.get(table).cloned().unwrap_or_default()
    }

    fn field_as_string(row: &Value, column: &str) -> Option<String> {
        match row.get(column)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn matches_filters(row: &Value, filters: &[(String, String)]) -> bool {
        filters.iter().all(|(column, value)| {
            Self::field_as_string(row, column).is_some_and(|field| field == *value)
        })
    }
}

#[async_trait::async_trait]
impl QueryClient for MemoryQueryClient {
    async fn select(&self, query: SelectQuery) -> QueryResult<Vec<Value>> {
        let tables = self.tables.lock().expect("table lock");
        let rows = tables
            .get(query.table_name())
            .ok_or_else(|| {
                QueryError::InvalidQuery(format!("unknown table: {}", query.table_name()))
            })?
            .clone();
        drop(tables);

        let mut matched: Vec<Value> = rows
            .into_iter()
            .filter(|row| Self::matches_filters(row, query.eq_filters()))
            .collect();

        if let Some(order_column) = query.descending_order() {
            matched.sort_by(|a, b| {
                let a_key = Self::field_as_string(a, order_column).unwrap_or_default();
                let b_key = Self::field_as_string(b, order_column).unwrap_or_default();
                b_key.cmp(&a_key)
            });
        }

        if query.selected_columns().is_empty() {
            return Ok(matched);
        }

        let projected = matched
            .into_iter()
            .map(|row| {
                let mut object = serde_json::Map::new();
                for column in query.selected_columns() {
                    if let Some(value) = row.get(column) {
                        object.insert(column.clone(), value.clone());
                    }
                }
                Value::Object(object)
            })
            .collect();

        Ok(projected)
    }

    async fn update(&self, query: UpdateQuery) -> QueryResult<u64> {
        if query.set_columns().is_empty() {
            return Err(QueryError::InvalidQuery(
                "update must set at least one column".into(),
            ));
        }

        let mut tables = self.tables.lock().expect("table lock");
        let rows = tables.get_mut(query.table_name()).ok_or_else(|| {
            QueryError::InvalidQuery(format!("unknown table: {}", query.table_name()))
        })?;

        let mut affected = 0u64;
        for row in rows.iter_mut() {
            if !Self::matches_filters(row, query.eq_filters()) {
                continue;
            }
            if let Value::Object(object) = row {
                for (column, value) in query.set_columns() {
                    object.insert(column.clone(), value.clone());
                }
                affected += 1;
            }
        }

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded_client() -> MemoryQueryClient {
        let client = MemoryQueryClient::new();
        client.insert_row(
            "patients",
            json!({"mrn": "MRN100", "name": "Jane Doe", "status": "Active", "admission_date": "2024-01-02"}),
        );
        client.insert_row(
            "patients",
            json!({"mrn": "MRN101", "name": "Alex Poe", "status": "Discharged", "admission_date": "2024-01-03"}),
        );
        client.insert_row(
            "patients",
            json!({"mrn": "MRN102", "name": "Sam Noe", "status": "Active", "admission_date": "2024-01-04"}),
        );
        client
    }

    #[tokio::test]
    async fn select_filters_orders_and_projects() {
        let client = seeded_client();
        let rows = client
            .select(
                SelectQuery::table("patients")
                    .columns(&["mrn", "name"])
                    .filter_eq("status", "Active")
                    .order_desc("admission_date"),
            )
            .await
            .expect("select");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], json!({"mrn": "MRN102", "name": "Sam Noe"}));
        assert_eq!(rows[1], json!({"mrn": "MRN100", "name": "Jane Doe"}));
    }

    #[tokio::test]
    async fn select_unknown_table_is_an_error() {
        let client = seeded_client();
        let err = client
            .select(SelectQuery::table("theatres"))
            .await
            .expect_err("unknown table");
        assert!(matches!(err, QueryError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn update_changes_only_matched_rows_and_reports_count() {
        let client = seeded_client();
        let affected = client
            .update(
                UpdateQuery::table("patients")
                    .set("status", "Discharged")
                    .filter_eq("mrn", "MRN100")
                    .filter_eq("status", "Active"),
            )
            .await
            .expect("update");
        assert_eq!(affected, 1);

        let rows = client.rows("patients");
        assert_eq!(rows[0]["status"], "Discharged");
        assert_eq!(rows[2]["status"], "Active");

        // A second identical update matches nothing.
        let affected = client
            .update(
                UpdateQuery::table("patients")
                    .set("status", "Discharged")
                    .filter_eq("mrn", "MRN100")
                    .filter_eq("status", "Active"),
            )
            .await
            .expect("update");
        assert_eq!(affected, 0);
    }
}
