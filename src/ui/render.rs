use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::form::{FieldId, FormValues};
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::query::QueryViewState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.screen()), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Form => draw_form(frame, app, body),
        Screen::Query => draw_query(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(app.screen(), footer), footer);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let form = app.form();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name input
            Constraint::Length(1), // name error
            Constraint::Length(3), // email input
            Constraint::Length(1), // email error
            Constraint::Length(1),
            Constraint::Length(4), // live echo
            Constraint::Min(0),
        ])
        .split(area);

    for (idx, field) in form.fields.iter().enumerate() {
        let input_area = rows[idx * 2];
        let error_area = rows[idx * 2 + 1];
        let focused = idx == form.focused && !form.modal_open();

        let border = if focused { ACCENT } else { GLOBAL_BORDER };
        let input = Paragraph::new(field.value.clone())
            .style(Style::default().fg(HEADER_TEXT))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(input, input_area);

        if let Some(error) = &field.error {
            frame.render_widget(
                Paragraph::new(format!(" {}", error.message))
                    .style(Style::default().fg(STATUS_ERROR)),
                error_area,
            );
        }

        if focused && input_area.width > 2 && input_area.height > 2 {
            let cursor_x = input_area.x + 1 + field.value.chars().count() as u16;
            let max_x = input_area.x + input_area.width.saturating_sub(2);
            frame.set_cursor_position(Position::new(cursor_x.min(max_x), input_area.y + 1));
        }
    }

    // Live echo of both values, updated on every keystroke.
    let echo_lines = vec![
        Line::from(vec![
            Span::styled("Name : ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                form.value_of(FieldId::Name).to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
        Line::from(vec![
            Span::styled("Email: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                form.value_of(FieldId::Email).to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
    ];
    let echo = Paragraph::new(echo_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Live Values")
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(echo, rows[5]);

    if let Some(values) = &form.submitted {
        draw_submitted_modal(frame, values, area);
    }
}

fn draw_submitted_modal(frame: &mut Frame<'_>, values: &FormValues, area: Rect) {
    let lines = vec![
        Line::from(format!("Name:  {}", values.name)),
        Line::from(format!("Email: {}", values.email)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: Close",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(24);
    let height = lines.len().saturating_add(2) as u16;
    let modal_area = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, modal_area);
    let block = Block::default()
        .title(Span::styled("Submitted", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}

fn draw_query(frame: &mut Frame<'_>, app: &App, area: Rect) {
    // Branches in fixed priority order: pending, then error, then success.
    let content = match app.query_view() {
        QueryViewState::Pending => {
            Paragraph::new("Loading...").style(Style::default().fg(HEADER_TEXT))
        }
        QueryViewState::Error { message } => {
            Paragraph::new(format!("An error has occurred: {message}"))
                .style(Style::default().fg(STATUS_ERROR))
        }
        QueryViewState::Success { repo } => {
            let description = repo.description.clone().unwrap_or_default();
            let lines = vec![
                Line::from(Span::styled(
                    repo.name.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(description, Style::default().fg(HEADER_TEXT))),
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        format!("👀 {}", repo.subscribers_count),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("✨ {}", repo.stargazers_count),
                        Style::default().fg(STATUS_OK),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("🍴 {}", repo.forks_count),
                        Style::default().fg(HEADER_TEXT),
                    ),
                ]),
            ];
            Paragraph::new(lines)
        }
    };

    frame.render_widget(
        content.block(
            Block::default()
                .borders(Borders::ALL)
                .title("Repository")
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
