use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::todo::{Counts, FilterMode};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, the count for the active filter mode and
    /// the version on the right. The count always comes from the
    /// unfiltered store.
    pub fn widget(&self, area: Rect, counts: Counts, filter: FilterMode) -> Paragraph<'static> {
        let hints = " a:add │ spc:done │ e:edit │ d:del │ f:filter │ q:quit";
        let status = format!("{} {} · v{} ", counts.displayed(filter), filter.label(), VERSION);

        // Pad by char count, not byte count.
        let hints_width = hints.chars().count();
        let status_width = status.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(status_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}
