use chrono::NaiveDate;

use crate::todo::item::Todo;

/// Cosmetic due-date classification of a rendered row. Never blocks any
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
}

/// Date-only comparison against the caller's "today" (local time at the
/// call site). Completed todos are never classified.
pub fn classify_due(todo: &Todo, today: NaiveDate) -> Option<DueStatus> {
    let due = todo.due_date?;
    if todo.completed {
        return None;
    }
    if due < today {
        Some(DueStatus::Overdue)
    } else if due == today {
        Some(DueStatus::DueToday)
    } else {
        None
    }
}
