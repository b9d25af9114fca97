use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: Screen) -> Paragraph<'static> {
        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(label, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(label, Style::default().fg(MUTED_TEXT))
            }
        };

        let line = Line::from(vec![
            Span::styled(" fieldwork ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("│ ", Style::default().fg(MUTED_TEXT)),
            tab("Form", screen == Screen::Form),
            Span::styled(" │ ", Style::default().fg(MUTED_TEXT)),
            tab("Query", screen == Screen::Query),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
