use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::api::csrf::{extract_meta_token, CsrfTokenSource};
use crate::api::error::ApiError;
use crate::api::types::{
    AckResponse, CreateTodoRequest, EditTodoRequest, ListResponse, TodoResponse, ToggleRequest,
};
use crate::config::ServerConfig;
use crate::todo::TodoId;

const TODOS_PATH: &str = "/api/todos";
const REQUESTED_WITH: &str = "X-Requested-With";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Client for the remote todo API.
///
/// Holds a shared `reqwest::Client` with a cookie jar (same-origin
/// credential semantics) and the anti-forgery token source. Cloning is
/// cheap; clones share the jar and token cell.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    csrf: Arc<CsrfTokenSource>,
}

impl ApiClient {
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&server.base_url).map_err(|e| ApiError::InvalidBase {
            url: server.base_url.clone(),
            message: e.to_string(),
        })?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &server.session_cookie {
            jar.add_cookie_str(cookie, &base_url);
        }

        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| ApiError::Transport {
                path: server.base_url.clone(),
                source: e,
            })?;

        let csrf = Arc::new(CsrfTokenSource::new(jar, base_url.clone()));
        Ok(Self {
            http,
            base_url,
            csrf,
        })
    }

    /// Fetch the app shell once and capture its `_csrf` meta token.
    ///
    /// Failure is tolerated: the cookie fallback covers servers that only
    /// mirror the token into `XSRF-TOKEN`.
    pub async fn bootstrap(&self) {
        match self.http.get(self.base_url.clone()).send().await {
            Ok(response) => match response.text().await {
                Ok(html) => {
                    let token = extract_meta_token(&html);
                    if token.is_none() {
                        tracing::debug!("no _csrf meta token in app shell, relying on cookie");
                    }
                    self.csrf.set_page_token(token);
                }
                Err(e) => tracing::warn!("failed to read app shell body: {e}"),
            },
            Err(e) => tracing::warn!("app shell fetch failed: {e}"),
        }
    }

    pub async fn list_todos(&self) -> Result<ListResponse, ApiError> {
        self.call(Method::GET, TODOS_PATH, None::<&()>).await
    }

    pub async fn create_todo(&self, request: &CreateTodoRequest) -> Result<TodoResponse, ApiError> {
        self.call(Method::POST, TODOS_PATH, Some(request)).await
    }

    pub async fn toggle_todo(&self, id: TodoId, completed: bool) -> Result<TodoResponse, ApiError> {
        let path = format!("{TODOS_PATH}/{id}");
        self.call(Method::PUT, &path, Some(&ToggleRequest { completed }))
            .await
    }

    pub async fn edit_todo(
        &self,
        id: TodoId,
        request: &EditTodoRequest,
    ) -> Result<TodoResponse, ApiError> {
        let path = format!("{TODOS_PATH}/{id}");
        self.call(Method::PUT, &path, Some(request)).await
    }

    pub async fn delete_todo(&self, id: TodoId) -> Result<AckResponse, ApiError> {
        let path = format!("{TODOS_PATH}/{id}");
        self.call(Method::DELETE, &path, None::<&()>).await
    }

    /// One API round-trip.
    ///
    /// Non-GET requests with a payload JSON-encode it as the body and
    /// carry the anti-forgery token. A 401/403 answer short-circuits to
    /// [`ApiError::AuthRequired`] without touching the body; everything
    /// else is parsed as JSON into the caller's `{success, ...}` type.
    async fn call<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path).map_err(|e| ApiError::InvalidBase {
            url: self.base_url.to_string(),
            message: e.to_string(),
        })?;
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %method, path, "api request");

        let mutating = method != Method::GET;
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUESTED_WITH, "XMLHttpRequest");

        if mutating {
            if let Some(token) = self.csrf.token() {
                builder = builder.header(XSRF_HEADER, token);
            }
        }
        if mutating {
            if let Some(body) = body {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%request_id, path, "transport failure: {e}");
            ApiError::Transport {
                path: path.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(%request_id, path, %status, "authentication required");
            return Err(ApiError::AuthRequired {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            tracing::warn!(%request_id, path, "decode failure: {e}");
            ApiError::Decode {
                path: path.to_string(),
                source: e,
            }
        })
    }
}
