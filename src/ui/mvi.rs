//! Unidirectional data-flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! States are self-contained values the view renders from; intents are
//! user actions or resolved system events; reducers are the only place
//! state transitions happen.

/// Marker trait for UI state objects.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user actions or system events).
pub trait Intent: Send + 'static {}

/// Pure transform from (state, intent) to the next state. No side
/// effects; anything that talks to the network lives in the controller.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
