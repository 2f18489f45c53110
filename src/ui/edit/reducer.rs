use crate::ui::edit::intent::EditIntent;
use crate::ui::edit::state::{EditField, EditSessionState};
use crate::ui::mvi::Reducer;

pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditSessionState;
    type Intent = EditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditIntent::Start { id, text, due_date } => match state {
                // One edit at a time: a second start is dropped and the
                // session stays on the original id.
                EditSessionState::Editing { .. } => state,
                EditSessionState::Idle => EditSessionState::Editing {
                    id,
                    text,
                    due_date: due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                    field: EditField::Text,
                    saving: false,
                },
            },
            EditIntent::Input(c) => match state {
                EditSessionState::Editing {
                    id,
                    mut text,
                    mut due_date,
                    field,
                    saving: false,
                } => {
                    match field {
                        EditField::Text => text.push(c),
                        EditField::DueDate => due_date.push(c),
                    }
                    EditSessionState::Editing {
                        id,
                        text,
                        due_date,
                        field,
                        saving: false,
                    }
                }
                other => other,
            },
            EditIntent::Backspace => match state {
                EditSessionState::Editing {
                    id,
                    mut text,
                    mut due_date,
                    field,
                    saving: false,
                } => {
                    match field {
                        EditField::Text => {
                            text.pop();
                        }
                        EditField::DueDate => {
                            due_date.pop();
                        }
                    }
                    EditSessionState::Editing {
                        id,
                        text,
                        due_date,
                        field,
                        saving: false,
                    }
                }
                other => other,
            },
            EditIntent::SwitchField => match state {
                EditSessionState::Editing {
                    id,
                    text,
                    due_date,
                    field,
                    saving: false,
                } => EditSessionState::Editing {
                    id,
                    text,
                    due_date,
                    field: match field {
                        EditField::Text => EditField::DueDate,
                        EditField::DueDate => EditField::Text,
                    },
                    saving: false,
                },
                other => other,
            },
            EditIntent::SaveRequested => match state {
                EditSessionState::Editing {
                    id,
                    text,
                    due_date,
                    field,
                    saving: false,
                } => EditSessionState::Editing {
                    id,
                    text,
                    due_date,
                    field,
                    saving: true,
                },
                other => other,
            },
            EditIntent::Resolved | EditIntent::Cancel => EditSessionState::Idle,
        }
    }
}
