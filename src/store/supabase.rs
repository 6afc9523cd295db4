//! Sync PostgREST client for the `todos` table.
//!
//! One `ureq::Agent` is built at startup and reused for every call — this is
//! the single long-lived connection handle; nothing else is shared between
//! operations. Query-string construction is kept in plain functions so the
//! request shapes unit-test without a network.

use std::time::Duration;

use serde_json::Value;

use crate::config::Settings;
use crate::error::{Result, TodoError};
use crate::model::Todo;

/// Remote table name
pub const TABLE: &str = "todos";

/// Columns selected for every read; matches the `Todo` row shape
pub const SELECT_COLUMNS: &str = "id,title,done,inserted_at";

const TIMEOUT_SECS: u64 = 10;

/// Build the query pairs for a list request: full column selection, newest
/// first, optional equality filter on `done`.
pub fn list_query(done: Option<bool>) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("select", SELECT_COLUMNS.to_string()),
        ("order", "inserted_at.desc".to_string()),
    ];
    if let Some(done) = done {
        query.push(("done", eq_filter(&done.to_string())));
    }
    query
}

/// PostgREST equality filter operand: `eq.{value}`
pub fn eq_filter(value: &str) -> String {
    format!("eq.{}", value)
}

/// HTTP client for the remote todo table.
///
/// Holds the endpoint, the static key, and the shared agent; never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct StoreClient {
    agent: ureq::Agent,
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    pub fn new(settings: &Settings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build();
        Self {
            agent,
            base_url: settings.url.clone(),
            anon_key: settings.anon_key.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn request(&self, method: &str, query: &[(&str, String)]) -> ureq::Request {
        let mut req = self
            .agent
            .request(method, &self.table_url())
            .set("apikey", &self.anon_key)
            .set("Authorization", &format!("Bearer {}", self.anon_key));
        for (key, value) in query {
            req = req.query(key, value);
        }
        req
    }

    /// Writes ask PostgREST to echo the affected rows back.
    fn write_request(&self, method: &str, query: &[(&str, String)]) -> ureq::Request {
        self.request(method, query)
            .set("Prefer", "return=representation")
    }

    /// GET rows matching `query`. A null/absent body reads as no rows.
    pub fn select(&self, query: &[(&str, String)]) -> Result<Vec<Todo>> {
        let response = self.request("GET", query).call()?;
        parse_rows(response.into_json()?)
    }

    /// POST a single row; returns the created rows.
    pub fn insert(&self, row: Value) -> Result<Vec<Todo>> {
        let query = [("select", SELECT_COLUMNS.to_string())];
        let response = self.write_request("POST", &query).send_json(row)?;
        parse_rows(response.into_json()?)
    }

    /// PATCH rows matching `id`; returns the updated rows (empty when the id
    /// matched nothing).
    pub fn update_by_id(&self, id: i64, patch: Value) -> Result<Vec<Todo>> {
        let query = [
            ("id", eq_filter(&id.to_string())),
            ("select", SELECT_COLUMNS.to_string()),
        ];
        let response = self.write_request("PATCH", &query).send_json(patch)?;
        parse_rows(response.into_json()?)
    }

    /// DELETE rows matching `id`; returns the deleted rows' last-known values.
    pub fn delete_by_id(&self, id: i64) -> Result<Vec<Todo>> {
        let query = [
            ("id", eq_filter(&id.to_string())),
            ("select", SELECT_COLUMNS.to_string()),
        ];
        let response = self.write_request("DELETE", &query).call()?;
        parse_rows(response.into_json()?)
    }

    /// Cheap reachability probe: one id, no row decoding.
    pub fn probe(&self) -> Result<()> {
        let query = [("select", "id".to_string()), ("limit", "1".to_string())];
        let response = self.request("GET", &query).call()?;
        response.into_json::<Value>()?;
        Ok(())
    }
}

/// PostgREST returns a JSON array of rows; `null` means no rows. Anything
/// else is a shape mismatch.
fn parse_rows(body: Value) -> Result<Vec<Todo>> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        other => Err(TodoError::store(format!(
            "expected a row array, got: {}",
            other
        ))),
    }
}
