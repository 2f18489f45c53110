use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
}

/// Where the todo API lives and how requests authenticate against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the server hosting `/api/todos` and `/login`.
    pub base_url: String,
    /// Session cookie issued by the server's login flow, as a single
    /// `NAME=VALUE` pair. Issuing and expiring it stays the server's job.
    pub session_cookie: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            session_cookie: None,
        }
    }
}

/// Terminal UI tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}
