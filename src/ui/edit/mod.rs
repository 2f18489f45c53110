//! Inline edit session: the single mutual-exclusion device in the UI.

mod intent;
mod reducer;
mod state;

pub use intent::EditIntent;
pub use reducer::EditReducer;
pub use state::{EditField, EditSessionState};
