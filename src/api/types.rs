use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::todo::Todo;

/// `GET /api/todos` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/todos` and `PUT /api/todos/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoResponse {
    pub success: bool,
    #[serde(default)]
    pub todo: Option<Todo>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `DELETE /api/todos/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/todos`. An unset due date is omitted from the wire
/// entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Body of a completion flip, `PUT /api/todos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleRequest {
    pub completed: bool,
}

/// Body of a saved edit, `PUT /api/todos/{id}`. Every save sends the
/// current field values; a cleared due date goes out as explicit `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTodoRequest {
    pub text: String,
    pub due_date: Option<NaiveDate>,
}
