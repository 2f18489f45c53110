use std::collections::HashSet;

use chrono::NaiveDate;
use tokio::sync::mpsc;

use crate::api::{ApiCommand, ApiError, ApiEvent};
use crate::todo::{Counts, FilterMode, Todo, TodoId, TodoPatch, TodoStore};
use crate::ui::edit::{EditIntent, EditReducer, EditSessionState};
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Alert,
    ConfirmDelete,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    AddText,
    AddDate,
    Popup(PopupKind),
}

/// Which top-level view the terminal shows. Auth failures navigate to
/// the login screen unconditionally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Todos,
    LoginRequired,
}

/// Semantic user actions, routed through the single dispatch entry
/// point. Key handling translates input into these; render output never
/// closes over controller state.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Reload,
    SubmitAdd,
    Toggle { id: TodoId },
    RequestDelete { id: TodoId },
    ConfirmDelete,
    ClosePopup,
    StartEdit { id: TodoId },
    SaveEdit,
    CancelEdit,
    CycleFilter,
    RetryAfterLogin,
    Quit,
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// In-flight request guard: at most one outstanding request per
/// (action kind, todo id). Dropping a duplicate dispatch is the only
/// coordination; unrelated actions are free to race.
#[derive(Debug, Default)]
struct PendingOps {
    load: bool,
    add: bool,
    toggles: HashSet<TodoId>,
    saves: HashSet<TodoId>,
    deletes: HashSet<TodoId>,
}

impl PendingOps {
    fn try_begin_load(&mut self) -> bool {
        !std::mem::replace(&mut self.load, true)
    }

    fn try_begin_add(&mut self) -> bool {
        !std::mem::replace(&mut self.add, true)
    }

    fn row_busy(&self, id: TodoId) -> bool {
        self.toggles.contains(&id) || self.saves.contains(&id) || self.deletes.contains(&id)
    }
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    focus: Focus,
    store: TodoStore,
    filter: FilterMode,
    selection: usize,
    /// Edit session state (MVI pattern).
    edit_session: EditSessionState,
    add_text: String,
    add_due: String,
    pending: PendingOps,
    alert: Option<String>,
    confirm_delete: Option<TodoId>,
    last_command_error: Option<String>,
    login_redirects: u64,
    login_url: String,
    api_sender: Option<ApiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Todos,
            focus: Focus::List,
            store: TodoStore::new(),
            filter: FilterMode::default(),
            selection: 0,
            edit_session: EditSessionState::default(),
            add_text: String::new(),
            add_due: String::new(),
            pending: PendingOps::default(),
            alert: None,
            confirm_delete: None,
            last_command_error: None,
            login_redirects: 0,
            login_url: "/login".to_string(),
            api_sender: None,
        }
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_sender = Some(sender);
    }

    /// Absolute login entry point shown on the login screen.
    pub fn set_login_url(&mut self, url: String) {
        self.login_url = url;
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    // ========================================================================
    // Read surface for the render loop
    // ========================================================================

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// The filtered subsequence the list renders, original order kept.
    pub fn visible(&self) -> Vec<&Todo> {
        self.filter.visible(self.store.todos())
    }

    /// Counts over the unfiltered store; the render loop picks the number
    /// matching the active filter mode.
    pub fn counts(&self) -> Counts {
        self.store.counts()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.visible().get(self.selection).copied()
    }

    pub fn edit_session(&self) -> &EditSessionState {
        &self.edit_session
    }

    pub fn add_text(&self) -> &str {
        &self.add_text
    }

    pub fn add_due(&self) -> &str {
        &self.add_due
    }

    pub fn is_loading(&self) -> bool {
        self.pending.load
    }

    pub fn is_adding(&self) -> bool {
        self.pending.add
    }

    pub fn row_busy(&self, id: TodoId) -> bool {
        self.pending.row_busy(id)
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn confirm_delete_id(&self) -> Option<TodoId> {
        self.confirm_delete
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// How many times an auth failure navigated to the login screen.
    pub fn login_redirects(&self) -> u64 {
        self.login_redirects
    }

    // ========================================================================
    // Input-mode mutations (selection, add form, edit fields)
    // ========================================================================

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1) as i32;
        self.selection = (current + delta).clamp(0, len as i32 - 1) as usize;
    }

    pub fn enter_add_mode(&mut self) {
        if self.focus == Focus::List && !self.edit_session.is_editing() {
            self.focus = Focus::AddText;
        }
    }

    pub fn leave_add_mode(&mut self) {
        if matches!(self.focus, Focus::AddText | Focus::AddDate) {
            self.focus = Focus::List;
        }
    }

    pub fn switch_add_field(&mut self) {
        self.focus = match self.focus {
            Focus::AddText => Focus::AddDate,
            Focus::AddDate => Focus::AddText,
            other => other,
        };
    }

    pub fn add_input(&mut self, c: char) {
        match self.focus {
            Focus::AddText => self.add_text.push(c),
            Focus::AddDate => self.add_due.push(c),
            _ => {}
        }
    }

    pub fn add_backspace(&mut self) {
        match self.focus {
            Focus::AddText => {
                self.add_text.pop();
            }
            Focus::AddDate => {
                self.add_due.pop();
            }
            _ => {}
        }
    }

    pub fn edit_input(&mut self, c: char) {
        self.dispatch_edit(EditIntent::Input(c));
    }

    pub fn edit_backspace(&mut self) {
        self.dispatch_edit(EditIntent::Backspace);
    }

    pub fn edit_switch_field(&mut self) {
        self.dispatch_edit(EditIntent::SwitchField);
    }

    // ========================================================================
    // Dispatch: one entry point for every semantic action
    // ========================================================================

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Reload => self.reload(),
            Action::SubmitAdd => self.submit_add(),
            Action::Toggle { id } => self.toggle(id),
            Action::RequestDelete { id } => self.request_delete(id),
            Action::ConfirmDelete => self.delete_confirmed(),
            Action::ClosePopup => self.close_popup(),
            Action::StartEdit { id } => self.start_edit(id),
            Action::SaveEdit => self.save_edit(),
            Action::CancelEdit => self.dispatch_edit(EditIntent::Cancel),
            Action::CycleFilter => self.cycle_filter(),
            Action::RetryAfterLogin => {
                self.screen = Screen::Todos;
                self.reload();
            }
        }
    }

    fn reload(&mut self) {
        if self.pending.try_begin_load() {
            if !self.send_command(ApiCommand::Load) {
                self.pending.load = false;
            }
        }
    }

    fn submit_add(&mut self) {
        let text = self.add_text.trim().to_string();
        if text.is_empty() {
            return;
        }
        let due_date = match parse_due_field(&self.add_due) {
            Ok(due) => due,
            Err(()) => {
                tracing::warn!(input = %self.add_due, "unparseable due date, add blocked");
                return;
            }
        };
        if !self.pending.try_begin_add() {
            return;
        }
        if !self.send_command(ApiCommand::Create { text, due_date }) {
            self.pending.add = false;
        }
    }

    fn toggle(&mut self, id: TodoId) {
        let Some(todo) = self.store.get(id) else {
            return;
        };
        let completed = !todo.completed;
        if !self.pending.toggles.insert(id) {
            return;
        }
        if !self.send_command(ApiCommand::Toggle { id, completed }) {
            self.pending.toggles.remove(&id);
        }
    }

    fn request_delete(&mut self, id: TodoId) {
        if self.store.get(id).is_none() || self.focus != Focus::List {
            return;
        }
        self.confirm_delete = Some(id);
        self.focus = Focus::Popup(PopupKind::ConfirmDelete);
    }

    fn delete_confirmed(&mut self) {
        let Some(id) = self.confirm_delete.take() else {
            return;
        };
        self.focus = Focus::List;
        if !self.pending.deletes.insert(id) {
            return;
        }
        if !self.send_command(ApiCommand::Delete { id }) {
            self.pending.deletes.remove(&id);
        }
    }

    fn close_popup(&mut self) {
        self.alert = None;
        self.confirm_delete = None;
        if matches!(self.focus, Focus::Popup(_)) {
            self.focus = Focus::List;
        }
    }

    fn start_edit(&mut self, id: TodoId) {
        if self.edit_session.is_editing() {
            return;
        }
        let Some(todo) = self.store.get(id) else {
            return;
        };
        let intent = EditIntent::Start {
            id,
            text: todo.text.clone(),
            due_date: todo.due_date,
        };
        self.dispatch_edit(intent);
    }

    /// Trim, validate, and issue the update. An empty trimmed text is a
    /// cancel; a cleared date field goes out as an explicit "no date".
    fn save_edit(&mut self) {
        let EditSessionState::Editing {
            id,
            text,
            due_date,
            saving: false,
            ..
        } = &self.edit_session
        else {
            return;
        };
        let id = *id;
        let trimmed = text.trim().to_string();
        if trimmed.is_empty() {
            self.dispatch_edit(EditIntent::Cancel);
            return;
        }
        let due = match parse_due_field(due_date) {
            Ok(due) => due,
            Err(()) => {
                tracing::warn!(input = %due_date, "unparseable due date, save blocked");
                return;
            }
        };
        if !self.pending.saves.insert(id) {
            return;
        }
        if self.send_command(ApiCommand::SaveEdit {
            id,
            text: trimmed,
            due_date: due,
        }) {
            self.dispatch_edit(EditIntent::SaveRequested);
        } else {
            self.pending.saves.remove(&id);
        }
    }

    fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selection = if len == 0 { 0 } else { self.selection.min(len - 1) };
    }

    // ========================================================================
    // Resolved API calls: the only place the store mutates
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Loaded(result) => {
                self.pending.load = false;
                match result {
                    Ok(response) if response.success => {
                        self.store.load(response.todos);
                        self.clamp_selection();
                    }
                    Ok(response) => {
                        tracing::warn!(message = ?response.message, "load rejected by server");
                    }
                    Err(e) => self.handle_api_error("load", &e),
                }
            }
            ApiEvent::Created(result) => {
                self.pending.add = false;
                match result {
                    Ok(response) if response.success => {
                        if let Some(todo) = response.todo {
                            self.store.insert_front(todo);
                        }
                        self.add_text.clear();
                        self.add_due.clear();
                        self.clamp_selection();
                    }
                    Ok(response) => {
                        let message = response.message.unwrap_or_default();
                        self.show_alert(format!("Failed to add todo: {message}"));
                    }
                    Err(e) if e.is_auth() => self.navigate_to_login(),
                    Err(e) => {
                        tracing::error!("add failed: {e}");
                        self.show_alert("Error while adding todo".to_string());
                    }
                }
            }
            ApiEvent::Toggled { id, completed, result } => {
                self.pending.toggles.remove(&id);
                match result {
                    Ok(response) if response.success => {
                        self.store.update(id, TodoPatch::completion(completed));
                    }
                    Ok(response) => {
                        tracing::warn!(id, message = ?response.message, "toggle rejected by server");
                    }
                    Err(e) => self.handle_api_error("toggle", &e),
                }
            }
            ApiEvent::Saved { id, text, due_date, result } => {
                self.pending.saves.remove(&id);
                // Exit the session whatever happened, but only if it is
                // still this todo's session (the user may have cancelled
                // mid-flight and opened another).
                if self.edit_session.editing_id() == Some(id) {
                    self.dispatch_edit(EditIntent::Resolved);
                }
                match result {
                    Ok(response) if response.success => {
                        self.store.update(id, TodoPatch::content(text, due_date));
                    }
                    Ok(response) => {
                        tracing::warn!(id, message = ?response.message, "edit rejected by server");
                    }
                    Err(e) => self.handle_api_error("edit", &e),
                }
            }
            ApiEvent::Deleted { id, result } => {
                self.pending.deletes.remove(&id);
                match result {
                    Ok(response) if response.success => {
                        self.store.remove(id);
                        self.clamp_selection();
                    }
                    Ok(response) => {
                        tracing::warn!(id, message = ?response.message, "delete rejected by server");
                    }
                    Err(e) => self.handle_api_error("delete", &e),
                }
            }
        }
    }

    fn handle_api_error(&mut self, operation: &str, error: &ApiError) {
        if error.is_auth() {
            self.navigate_to_login();
        } else {
            tracing::warn!("{operation} failed: {error}");
        }
    }

    /// Unconditional navigation to the login entry point; recorded once
    /// per auth-failed response.
    fn navigate_to_login(&mut self) {
        self.login_redirects += 1;
        self.screen = Screen::LoginRequired;
        self.focus = Focus::List;
        tracing::warn!(url = %self.login_url, "navigating to login");
    }

    fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
        self.focus = Focus::Popup(PopupKind::Alert);
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.api_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("API channel full: {err}"));
                false
            }
        }
    }

    fn dispatch_edit(&mut self, intent: EditIntent) {
        dispatch_mvi!(self, edit_session, EditReducer, intent);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty field means "no due date"; anything else must be `YYYY-MM-DD`.
fn parse_due_field(input: &str) -> Result<Option<NaiveDate>, ()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(todos: Vec<Todo>) -> App {
        let mut app = App::new();
        app.store.load(todos);
        app
    }

    // -- pending guard -----------------------------------------------------

    #[test]
    fn second_load_while_pending_is_dropped() {
        let mut pending = PendingOps::default();
        assert!(pending.try_begin_load());
        assert!(!pending.try_begin_load());
        pending.load = false;
        assert!(pending.try_begin_load());
    }

    #[test]
    fn row_busy_tracks_any_per_id_operation() {
        let mut pending = PendingOps::default();
        assert!(!pending.row_busy(7));
        pending.deletes.insert(7);
        assert!(pending.row_busy(7));
        assert!(!pending.row_busy(8));
    }

    // -- popup flow --------------------------------------------------------

    #[test]
    fn request_delete_opens_confirm_popup() {
        let mut app = app_with(vec![Todo::new(7, "X")]);
        app.dispatch(Action::RequestDelete { id: 7 });
        assert_eq!(app.popup_kind(), Some(PopupKind::ConfirmDelete));
        assert_eq!(app.confirm_delete_id(), Some(7));
    }

    #[test]
    fn close_popup_clears_confirm_state_without_deleting() {
        let mut app = app_with(vec![Todo::new(7, "X")]);
        app.dispatch(Action::RequestDelete { id: 7 });
        app.dispatch(Action::ClosePopup);
        assert_eq!(app.popup_kind(), None);
        assert_eq!(app.confirm_delete_id(), None);
        assert!(app.store().get(7).is_some());
    }

    #[test]
    fn request_delete_for_unknown_id_is_a_noop() {
        let mut app = app_with(vec![Todo::new(1, "X")]);
        app.dispatch(Action::RequestDelete { id: 99 });
        assert_eq!(app.popup_kind(), None);
    }

    // -- filter & selection ------------------------------------------------

    #[test]
    fn cycle_filter_clamps_selection_to_visible() {
        let mut app = app_with(vec![
            Todo::new(1, "a"),
            Todo::new(2, "b"),
            Todo::new(3, "c").with_completed(true),
        ]);
        app.selection = 2;
        app.dispatch(Action::CycleFilter); // all -> pending, 2 visible
        assert_eq!(app.selection(), 1);
        app.dispatch(Action::CycleFilter); // pending -> completed, 1 visible
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn move_selection_clamps_at_both_ends() {
        let mut app = app_with(vec![Todo::new(1, "a"), Todo::new(2, "b")]);
        app.move_selection(-1);
        assert_eq!(app.selection(), 0);
        app.move_selection(5);
        assert_eq!(app.selection(), 1);
    }

    // -- add form ----------------------------------------------------------

    #[test]
    fn empty_add_text_issues_nothing() {
        let mut app = App::new();
        app.enter_add_mode();
        app.add_input(' ');
        app.dispatch(Action::SubmitAdd);
        assert!(!app.is_adding());
    }

    #[test]
    fn unparseable_add_date_blocks_submission() {
        let mut app = App::new();
        app.enter_add_mode();
        for c in "task".chars() {
            app.add_input(c);
        }
        app.switch_add_field();
        for c in "not-a-date".chars() {
            app.add_input(c);
        }
        app.dispatch(Action::SubmitAdd);
        assert!(!app.is_adding());
    }

    // -- due field parsing -------------------------------------------------

    #[test]
    fn parse_due_field_accepts_iso_dates_and_blank() {
        assert_eq!(parse_due_field(""), Ok(None));
        assert_eq!(parse_due_field("  "), Ok(None));
        assert_eq!(
            parse_due_field("2024-01-10"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 10))
        );
        assert_eq!(parse_due_field("01/10/2024"), Err(()));
    }

    // -- auth navigation ---------------------------------------------------

    #[test]
    fn auth_failure_navigates_to_login_exactly_once_per_response() {
        let mut app = App::new();
        app.on_api_event(ApiEvent::Loaded(Err(ApiError::AuthRequired { status: 401 })));
        assert_eq!(app.screen(), Screen::LoginRequired);
        assert_eq!(app.login_redirects(), 1);
    }
}
