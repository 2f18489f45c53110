use crate::todo::item::Todo;

/// Which subset of todos is currently visible. Process-wide UI state,
/// never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterMode {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => todo.completed,
            FilterMode::Pending => !todo.completed,
        }
    }

    /// The matching subsequence, preserving original order. Pure; calling
    /// it twice with the same inputs yields the same output.
    pub fn visible<'a>(self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|t| self.matches(t)).collect()
    }

    /// Cycle order used by the filter key: all → pending → completed.
    pub fn next(self) -> Self {
        match self {
            FilterMode::All => FilterMode::Pending,
            FilterMode::Pending => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Pending => "pending",
        }
    }
}

/// Tally over the unfiltered store. The count shown next to the list is
/// picked from here by the active filter mode, never from the filtered
/// subsequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Counts {
    pub fn of(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// The single number displayed for the given filter mode.
    pub fn displayed(self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total,
            FilterMode::Completed => self.completed,
            FilterMode::Pending => self.pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::new(1, "a").with_completed(true),
            Todo::new(2, "b"),
            Todo::new(3, "c").with_completed(true),
            Todo::new(4, "d"),
        ]
    }

    #[test]
    fn all_is_identity() {
        let todos = sample();
        let visible = FilterMode::All.visible(&todos);
        let ids: Vec<i64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn completed_keeps_only_completed_in_order() {
        let todos = sample();
        let ids: Vec<i64> = FilterMode::Completed.visible(&todos).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn pending_keeps_only_pending_in_order() {
        let todos = sample();
        let ids: Vec<i64> = FilterMode::Pending.visible(&todos).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn visible_contains_exactly_the_matching_elements() {
        let todos = sample();
        for mode in [FilterMode::All, FilterMode::Completed, FilterMode::Pending] {
            let visible = mode.visible(&todos);
            assert!(visible.iter().all(|t| mode.matches(t)));
            let expected = todos.iter().filter(|t| mode.matches(t)).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn counts_come_from_the_unfiltered_sequence() {
        let counts = Counts::of(&sample());
        assert_eq!(counts.total, 4);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.displayed(FilterMode::All), 4);
        assert_eq!(counts.displayed(FilterMode::Completed), 2);
        assert_eq!(counts.displayed(FilterMode::Pending), 2);
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = FilterMode::All;
        assert_eq!(start.next(), FilterMode::Pending);
        assert_eq!(start.next().next(), FilterMode::Completed);
        assert_eq!(start.next().next().next(), start);
    }
}
