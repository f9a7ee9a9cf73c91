//! HTTP client for the hosted record store
//!
//! Speaks the store's REST dialect: filters become query parameters
//! (`column=op.value`), writes carry `Prefer: return=representation` so the
//! row comes back as written. The client performs no retries; a failed call
//! surfaces as a store error and the caller decides what happens next.

use std::time::Duration;

use loantrail_domain::{LoanTrailError, Result, StoreConfig};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Comparison operator supported by the store's query interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lte,
}

impl FilterOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gte => "gte",
            Self::Lte => "lte",
        }
    }
}

/// One column filter on a select or update.
#[derive(Debug, Clone)]
pub struct Filter {
    column: String,
    op: FilterOp,
    value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self { column: column.into(), op: FilterOp::Eq, value: value.to_string() }
    }

    pub fn gte(column: impl Into<String>, value: impl ToString) -> Self {
        Self { column: column.into(), op: FilterOp::Gte, value: value.to_string() }
    }

    pub fn lte(column: impl Into<String>, value: impl ToString) -> Self {
        Self { column: column.into(), op: FilterOp::Lte, value: value.to_string() }
    }

    fn as_query_pair(&self) -> (String, String) {
        (self.column.clone(), format!("{}.{}", self.op.as_str(), self.value))
    }
}

/// Result ordering for a select.
#[derive(Debug, Clone)]
pub struct Order {
    column: String,
    descending: bool,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self { column: column.into(), descending: false }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self { column: column.into(), descending: true }
    }

    fn as_query_value(&self) -> String {
        let direction = if self.descending { "desc" } else { "asc" };
        format!("{}.{}", self.column, direction)
    }
}

/// Error body the store returns on failed calls.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
    code: Option<String>,
    hint: Option<String>,
}

/// Client for the hosted record store.
pub struct RecordStoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RecordStoreClient {
    /// Build a client from store settings.
    ///
    /// # Errors
    /// Returns a config error if the underlying HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|err| {
                LoanTrailError::Config(format!("failed to build record-store client: {err}"))
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Filtered select returning raw JSON rows.
    #[instrument(skip(self))]
    pub async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&Order>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>> {
        let mut query: Vec<(String, String)> =
            filters.iter().map(Filter::as_query_pair).collect();
        if let Some(order) = order {
            query.push(("order".into(), order.as_query_value()));
        }
        if let Some(limit) = limit {
            query.push(("limit".into(), limit.to_string()));
        }

        let response = self
            .authorized(self.http.get(self.table_url(table)))
            .query(&query)
            .send()
            .await
            .map_err(|err| map_transport_error(table, "select", &err))?;

        let rows: Vec<Value> = Self::checked(table, "select", response).await?;
        debug!(table, rows = rows.len(), "record store select");
        Ok(rows)
    }

    /// Insert one row; returns the row as the store wrote it.
    #[instrument(skip(self, row))]
    pub async fn insert(&self, table: &str, row: Value) -> Result<Value> {
        let response = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|err| map_transport_error(table, "insert", &err))?;

        let mut rows: Vec<Value> = Self::checked(table, "insert", response).await?;
        if rows.is_empty() {
            return Err(LoanTrailError::Store(format!(
                "insert into {table} returned no representation"
            )));
        }
        Ok(rows.remove(0))
    }

    /// Apply a patch to every row matching the filters; returns the first
    /// updated row.
    ///
    /// # Errors
    /// `NotFound` when no row matched the filters.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> Result<Value> {
        let query: Vec<(String, String)> = filters.iter().map(Filter::as_query_pair).collect();

        let response = self
            .authorized(self.http.patch(self.table_url(table)))
            .header("Prefer", "return=representation")
            .query(&query)
            .json(&patch)
            .send()
            .await
            .map_err(|err| map_transport_error(table, "update", &err))?;

        let mut rows: Vec<Value> = Self::checked(table, "update", response).await?;
        if rows.is_empty() {
            return Err(LoanTrailError::NotFound(format!("no matching row in {table}")));
        }
        Ok(rows.remove(0))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    /// Surface a non-success response as a store error carrying whatever
    /// diagnostic detail the store provided.
    async fn checked<T: serde::de::DeserializeOwned>(
        table: &str,
        operation: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<StoreErrorBody>(&body) {
                Ok(parsed) => {
                    let mut parts = Vec::new();
                    if let Some(message) = parsed.message {
                        parts.push(message);
                    }
                    if let Some(code) = parsed.code {
                        parts.push(format!("code={code}"));
                    }
                    if let Some(hint) = parsed.hint {
                        parts.push(format!("hint={hint}"));
                    }
                    parts.join(", ")
                }
                Err(_) => body,
            };
            warn!(table, operation, status = %status, detail, "record store call failed");
            return Err(LoanTrailError::Store(format!(
                "{operation} on {table} failed with {status}: {detail}"
            )));
        }

        response.json().await.map_err(|err| {
            LoanTrailError::Store(format!("{operation} on {table} returned malformed body: {err}"))
        })
    }
}

fn map_transport_error(table: &str, operation: &str, err: &reqwest::Error) -> LoanTrailError {
    warn!(table, operation, error = %err, "record store call did not complete");
    LoanTrailError::Store(format!("{operation} on {table} did not complete: {err}"))
}
