use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier. Immutable after creation.
pub type TodoId = i64;

/// A single todo entry as the server represents it on the wire.
///
/// `due_date` is a calendar date without a time component
/// (`YYYY-MM-DD` on the wire); parsing it through [`NaiveDate`] keeps it
/// from shifting a day under any timezone. `created_at` / `updated_at`
/// are server timestamps carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            due_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_shape() {
        let json = r#"{
            "id": 7,
            "text": "Buy milk",
            "completed": false,
            "dueDate": "2024-01-10",
            "createdAt": "2024-01-01T09:30:00"
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 7);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(
            todo.due_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
        );
        assert_eq!(todo.created_at.as_deref(), Some("2024-01-01T09:30:00"));
        assert!(todo.updated_at.is_none());
    }

    #[test]
    fn due_date_round_trips_without_day_shift() {
        let todo = Todo::new(1, "X").with_due_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        let json = serde_json::to_string(&todo).unwrap();
        assert!(json.contains(r#""dueDate":"2024-01-10""#));
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.due_date, todo.due_date);
    }

    #[test]
    fn absent_due_date_stays_absent_on_the_wire() {
        let json = serde_json::to_string(&Todo::new(1, "X")).unwrap();
        assert!(!json.contains("dueDate"));
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"text":"X"}"#).unwrap();
        assert!(!todo.completed);
    }
}
