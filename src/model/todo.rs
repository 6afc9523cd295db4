//! Typed row for the remote `todos` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo row as stored in the remote table.
///
/// `id` and `inserted_at` are assigned by the store at insert time and never
/// change afterwards. Deserialization is strict enough that a shape mismatch
/// from the store surfaces as a JSON error instead of a half-filled record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned unique id
    pub id: i64,
    /// Task description, non-empty after trimming
    pub title: String,
    /// Completion flag, false at creation
    pub done: bool,
    /// Store-assigned creation timestamp, used for descending sort
    pub inserted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_row() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"title":"Buy milk","done":false,"inserted_at":"2024-05-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.done);
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        // A row without `inserted_at` is malformed, not "partially valid"
        let result = serde_json::from_str::<Todo>(r#"{"id":1,"title":"x","done":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_keeps_timestamp() {
        let json = r#"{"id":7,"title":"Water plants","done":true,"inserted_at":"2024-05-02T08:30:00Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&todo).unwrap();
        assert_eq!(back["inserted_at"], "2024-05-02T08:30:00Z");
    }
}
