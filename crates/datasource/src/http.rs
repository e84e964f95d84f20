//! REST implementation of the query seam.
//!
//! The hosted service speaks a PostgREST-style dialect: reads are `GET
//! {base}/{table}` with `select`, `order` and `column=eq.value` query
//! parameters; updates are `PATCH {base}/{table}` with the set columns as a
//! JSON body and the same equality filters. `Prefer: return=representation`
//! makes the service echo the updated rows so the affected count is
//! observable.

use crate::client::{QueryClient, QueryError, QueryResult};
use crate::{SelectQuery, UpdateQuery};
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Query client speaking the hosted service's REST dialect.
#[derive(Clone, Debug)]
pub struct HttpQueryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpQueryClient {
    /// Build a client for the service at `base_url`.
    ///
    /// When `api_key` is present it is sent both as the `apikey` header and as
    /// a bearer token, which is what the hosted service expects.
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> QueryResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/').to_owned();
        if trimmed.is_empty() {
            return Err(QueryError::InvalidQuery(
                "data service base URL cannot be empty".into(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: trimmed,
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> QueryResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(QueryError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl QueryClient for HttpQueryClient {
    async fn select(&self, query: SelectQuery) -> QueryResult<Vec<Value>> {
        let mut params: Vec<(String, String)> = Vec::new();
        if !query.selected_columns().is_empty() {
            params.push(("select".to_owned(), query.selected_columns().join(",")));
        }
        for (column, value) in query.eq_filters() {
            params.push((column.clone(), format!("eq.{value}")));
        }
        if let Some(column) = query.descending_order() {
            params.push(("order".to_owned(), format!("{column}.desc")));
        }

        tracing::debug!(table = query.table_name(), "select");

        let response = self
            .apply_auth(self.http.get(self.table_url(query.table_name())))
            .query(&params)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json::<Vec<Value>>().await?)
    }

    async fn update(&self, query: UpdateQuery) -> QueryResult<u64> {
        if query.set_columns().is_empty() {
            return Err(QueryError::InvalidQuery(
                "update must set at least one column".into(),
            ));
        }

        let params: Vec<(String, String)> = query
            .eq_filters()
            .iter()
            .map(|(column, value)| (column.clone(), format!("eq.{value}")))
            .collect();

        tracing::debug!(table = query.table_name(), "update");

        let response = self
            .apply_auth(self.http.patch(self.table_url(query.table_name())))
            .query(&params)
            .header("Prefer", "return=representation")
            .json(query.set_columns())
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let rows = response.json::<Vec<Value>>().await?;
        Ok(rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client =
            HttpQueryClient::new("https://db.example.net/rest/v1/", None).expect("valid client");
        assert_eq!(
            client.table_url("patients"),
            "https://db.example.net/rest/v1/patients"
        );
    }

    #[test]
    fn rejects_empty_base_url() {
        let err = HttpQueryClient::new("  ", None).expect_err("empty url");
        assert!(matches!(err, QueryError::InvalidQuery(_)));
    }
}
