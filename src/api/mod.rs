//! Outbound HTTP: the todo API client, anti-forgery token sourcing, and
//! the async worker bridging the UI loop to the network.

mod client;
mod csrf;
mod error;
mod types;
mod worker;

pub use client::ApiClient;
pub use csrf::{extract_meta_token, CsrfTokenSource};
pub use error::ApiError;
pub use types::{
    AckResponse, CreateTodoRequest, EditTodoRequest, ListResponse, TodoResponse, ToggleRequest,
};
pub use worker::{run_worker, ApiCommand, ApiEvent};
