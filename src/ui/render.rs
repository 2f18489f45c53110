use chrono::NaiveDate;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::todo::{classify_due, DueStatus, FilterMode, Todo};
use crate::ui::app::{App, Focus, PopupKind, Screen};
use crate::ui::edit::{EditField, EditSessionState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, COMPLETED_TEXT, DUE_TODAY, GLOBAL_BORDER, HEADER_SEPARATOR,
    HEADER_TEXT, OVERDUE, POPUP_BORDER,
};

/// Rebuild the whole frame from the current state. Pure projection: no
/// state changes happen here.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    if app.screen() == Screen::LoginRequired {
        draw_login(frame, app);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    let (form, list) = body_regions(body);

    frame.render_widget(Header::new().widget(app.filter()), header);
    draw_add_form(frame, app, form);
    draw_list(frame, app, list);
    frame.render_widget(
        Footer::new().widget(footer, app.counts(), app.filter()),
        footer,
    );

    if let Some(kind) = app.popup_kind() {
        draw_popup(frame, app, kind, body);
    }
}

fn draw_add_form(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let adding = matches!(app.focus(), Focus::AddText | Focus::AddDate);
    let mut spans = Vec::new();

    if adding || !app.add_text().is_empty() || !app.add_due().is_empty() {
        spans.push(Span::styled("text: ", Style::default().fg(HEADER_SEPARATOR)));
        spans.push(field_span(
            app.add_text(),
            app.focus() == Focus::AddText,
        ));
        spans.push(Span::styled("   due: ", Style::default().fg(HEADER_SEPARATOR)));
        spans.push(field_span(app.add_due(), app.focus() == Focus::AddDate));
        if app.is_adding() {
            spans.push(Span::styled(
                "  adding…",
                Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
            ));
        }
    } else {
        spans.push(Span::styled(
            "press a to add a todo",
            Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
        ));
    }

    if let Some(err) = app.last_command_error() {
        spans.push(Span::styled(
            format!("  {err}"),
            Style::default().fg(OVERDUE).add_modifier(Modifier::DIM),
        ));
    }

    let title = if adding { "new todo (Enter: save · Esc: back · Tab: field)" } else { "new todo" };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(HEADER_SEPARATOR)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    frame.render_widget(Clear, area);

    if app.is_loading() && app.store().is_empty() {
        frame.render_widget(
            Paragraph::new("Loading todos…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_SEPARATOR)),
            area,
        );
        return;
    }

    let visible = app.visible();
    if visible.is_empty() {
        let message = match app.filter() {
            FilterMode::All => "No todos yet",
            FilterMode::Completed => "No completed todos",
            FilterMode::Pending => "No pending todos",
        };
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM)),
            area,
        );
        return;
    }

    let today = chrono::Local::now().date_naive();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|todo| ListItem::new(todo_line(app, todo, today)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One row: either the regular projection or, for the todo being edited,
/// the inline edit fields.
fn todo_line(app: &App, todo: &Todo, today: NaiveDate) -> Line<'static> {
    if let EditSessionState::Editing {
        id,
        text,
        due_date,
        field,
        saving,
    } = app.edit_session()
    {
        if *id == todo.id {
            return edit_line(text, due_date, *field, *saving);
        }
    }

    let mut spans = Vec::new();
    let marker = if todo.completed { "[x] " } else { "[ ] " };
    spans.push(Span::styled(marker, Style::default().fg(HEADER_TEXT)));

    let text_style = if todo.completed {
        Style::default()
            .fg(COMPLETED_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    spans.push(Span::styled(todo.text.clone(), text_style));

    if let Some(due) = todo.due_date {
        let due_style = match classify_due(todo, today) {
            Some(DueStatus::Overdue) => Style::default().fg(OVERDUE),
            Some(DueStatus::DueToday) => Style::default().fg(DUE_TODAY),
            None => Style::default().fg(HEADER_SEPARATOR),
        };
        let suffix = match classify_due(todo, today) {
            Some(DueStatus::Overdue) => " (overdue)",
            Some(DueStatus::DueToday) => " (today)",
            None => "",
        };
        spans.push(Span::styled(
            format!("  due {}{}", due.format("%b %d"), suffix),
            due_style,
        ));
    }

    if app.row_busy(todo.id) {
        spans.push(Span::styled(
            "  …",
            Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

fn edit_line(text: &str, due_date: &str, field: EditField, saving: bool) -> Line<'static> {
    let mut spans = vec![Span::styled("edit: ", Style::default().fg(ACCENT))];
    spans.push(field_span(text, field == EditField::Text && !saving));
    spans.push(Span::styled("   due: ", Style::default().fg(HEADER_SEPARATOR)));
    spans.push(field_span(due_date, field == EditField::DueDate && !saving));
    if saving {
        spans.push(Span::styled(
            "  saving…",
            Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(
            "  (Enter: save · Esc: cancel)",
            Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

fn field_span(value: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let rendered = if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };
    Span::styled(rendered, style)
}

fn draw_popup(frame: &mut Frame<'_>, app: &App, kind: PopupKind, body: ratatui::layout::Rect) {
    let (title, lines) = match kind {
        PopupKind::Alert => {
            let message = app.alert().unwrap_or("").to_string();
            (
                "Error",
                vec![
                    Line::from(message),
                    Line::from(""),
                    Line::from("Enter: Dismiss"),
                ],
            )
        }
        PopupKind::ConfirmDelete => {
            let text = app
                .confirm_delete_id()
                .and_then(|id| app.store().get(id))
                .map(|t| t.text.clone())
                .unwrap_or_default();
            (
                "Delete todo",
                vec![
                    Line::from(format!("Delete \"{text}\"?")),
                    Line::from(""),
                    Line::from("y/Enter: Delete   n/Esc: Keep"),
                ],
            )
        }
    };

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(24);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

fn draw_login(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let lines = vec![
        Line::from("Your session has expired or you are not signed in."),
        Line::from(""),
        Line::from(format!("Sign in at {}", app.login_url())),
        Line::from("then update [server].session_cookie in your config."),
        Line::from(""),
        Line::from("r: Retry   q: Quit"),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4);
    let popup_height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled("Login required", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(block),
        rect,
    );
}
