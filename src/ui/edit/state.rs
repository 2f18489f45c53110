use crate::todo::TodoId;
use crate::ui::mvi::UiState;

/// Which of the two inline inputs has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Text,
    DueDate,
}

/// At most one todo is in inline-edit mode at a time.
///
/// While `saving` is set the fields are frozen: the save request is in
/// flight and the session exits once it resolves, success or not.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSessionState {
    #[default]
    Idle,
    Editing {
        id: TodoId,
        text: String,
        /// Raw `YYYY-MM-DD` input; empty means "no due date".
        due_date: String,
        field: EditField,
        saving: bool,
    },
}

impl UiState for EditSessionState {}

impl EditSessionState {
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            Self::Idle => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Editing { saving: true, .. })
    }
}
