use chrono::NaiveDate;

use crate::todo::TodoId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditIntent {
    /// "Start edit" on todo `id`; copies the current text and due date
    /// into the editable fields. No-op while another edit is active.
    Start {
        id: TodoId,
        text: String,
        due_date: Option<NaiveDate>,
    },
    /// Character typed into the focused field.
    Input(char),
    /// Backspace in the focused field.
    Backspace,
    /// Move the cursor between text and due-date fields.
    SwitchField,
    /// The controller validated the fields and issued the update request.
    SaveRequested,
    /// The update request resolved (success or failure); session exits.
    Resolved,
    /// Explicit cancel, or a save whose trimmed text was empty.
    Cancel,
}

impl Intent for EditIntent {}
