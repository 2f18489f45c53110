use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::todo::FilterMode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title plus the filter tabs, the active one highlighted.
    pub fn widget(&self, filter: FilterMode) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  tudu", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for (i, mode) in [FilterMode::All, FilterMode::Pending, FilterMode::Completed]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::styled(" · ", separator_style));
            }
            let style = if mode == filter {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(mode.label(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
