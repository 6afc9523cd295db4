//! Todo gateway: the four operations over the remote store.
//!
//! Stateless across calls — every operation is one request/response round
//! trip against the `todos` table. The gateway owns only trivial input
//! validation; filtering and ordering happen in the store.

use serde_json::json;

use crate::config::Settings;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use crate::store::supabase::list_query;
use crate::store::StoreClient;

#[derive(Debug, Clone)]
pub struct TodoGateway {
    store: StoreClient,
}

impl TodoGateway {
    pub fn new(settings: &Settings) -> Self {
        Self {
            store: StoreClient::new(settings),
        }
    }

    /// List todos, newest first, optionally filtered by completion status.
    /// No matches is an empty list, never an error.
    pub fn list(&self, done: Option<bool>) -> Result<Vec<Todo>> {
        self.store.select(&list_query(done))
    }

    /// Insert a new todo with the trimmed title and `done = false`.
    pub fn add(&self, title: &str) -> Result<Todo> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        let rows = self.store.insert(json!({"title": title, "done": false}))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| TodoError::store("insert returned no row"))
    }

    /// Flip the `done` flag of one todo.
    pub fn set_done(&self, todo_id: i64, done: bool) -> Result<Todo> {
        let rows = self.store.update_by_id(todo_id, json!({"done": done}))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| TodoError::not_found(format!("todo id {}", todo_id)))
    }

    /// Delete one todo; returns its last-known values.
    pub fn delete(&self, todo_id: i64) -> Result<Todo> {
        let rows = self.store.delete_by_id(todo_id)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| TodoError::not_found(format!("todo id {}", todo_id)))
    }

    /// Reachability check for `todolist-mcp check`.
    pub fn probe(&self) -> Result<()> {
        self.store.probe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> TodoGateway {
        // Points at nothing routable; only used for paths that fail before I/O
        TodoGateway::new(&Settings {
            url: "http://127.0.0.1:9".to_string(),
            anon_key: "test".to_string(),
        })
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let err = gateway().add("").unwrap_err();
        assert!(matches!(err, TodoError::EmptyTitle));
    }

    #[test]
    fn test_add_rejects_whitespace_title() {
        let err = gateway().add("   \t\n").unwrap_err();
        assert!(matches!(err, TodoError::EmptyTitle));
    }
}
