use std::sync::mpsc::Sender;

use chrono::NaiveDate;
use tokio::sync::mpsc::Receiver;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{AckResponse, CreateTodoRequest, EditTodoRequest, ListResponse, TodoResponse};
use crate::todo::TodoId;
use crate::ui::events::AppEvent;

/// Requests the controller hands to the worker. Each carries everything
/// the eventual store mutation will need, so the handler never has to
/// look state up again when the response lands.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    Load,
    Create {
        text: String,
        due_date: Option<NaiveDate>,
    },
    Toggle {
        id: TodoId,
        completed: bool,
    },
    SaveEdit {
        id: TodoId,
        text: String,
        due_date: Option<NaiveDate>,
    },
    Delete {
        id: TodoId,
    },
}

/// Resolved API calls, re-entering the UI loop as `AppEvent::Api`.
#[derive(Debug)]
pub enum ApiEvent {
    Loaded(Result<ListResponse, ApiError>),
    Created(Result<TodoResponse, ApiError>),
    Toggled {
        id: TodoId,
        completed: bool,
        result: Result<TodoResponse, ApiError>,
    },
    Saved {
        id: TodoId,
        text: String,
        due_date: Option<NaiveDate>,
        result: Result<TodoResponse, ApiError>,
    },
    Deleted {
        id: TodoId,
        result: Result<AckResponse, ApiError>,
    },
}

/// Drain commands until the UI side hangs up.
///
/// Every command runs in its own task: unrelated actions are free to
/// race, and the store ends up with whatever the last-resolving confirmed
/// mutation produced. There is no cancellation or timeout; a stuck
/// request simply keeps its pending state until it resolves.
pub async fn run_worker(
    client: ApiClient,
    mut commands: Receiver<ApiCommand>,
    events: Sender<AppEvent>,
) {
    client.bootstrap().await;
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(&client, command).await;
            if events.send(AppEvent::Api(event)).is_err() {
                tracing::debug!("UI loop gone, dropping api event");
            }
        });
    }
}

async fn execute(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::Load => ApiEvent::Loaded(client.list_todos().await),
        ApiCommand::Create { text, due_date } => {
            let request = CreateTodoRequest { text, due_date };
            ApiEvent::Created(client.create_todo(&request).await)
        }
        ApiCommand::Toggle { id, completed } => ApiEvent::Toggled {
            id,
            completed,
            result: client.toggle_todo(id, completed).await,
        },
        ApiCommand::SaveEdit { id, text, due_date } => {
            let request = EditTodoRequest {
                text: text.clone(),
                due_date,
            };
            ApiEvent::Saved {
                id,
                text,
                due_date,
                result: client.edit_todo(id, &request).await,
            }
        }
        ApiCommand::Delete { id } => ApiEvent::Deleted {
            id,
            result: client.delete_todo(id).await,
        },
    }
}
