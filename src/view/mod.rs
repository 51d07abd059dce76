//! Drawing: app state to ratatui widgets.
//!
//! The view is stateless; everything it shows comes from [`App`] and the
//! transcript. One `draw` call per frame.

pub mod theme;
pub mod tooltip;

use crate::app::{App, Focus};
use crate::render::{metric_rows, table, LineKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    if app.goodbye {
        draw_goodbye(frame, app, area);
        return;
    }

    let prompt_rows = if app.prompt_enabled { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(prompt_rows),
            Constraint::Length(1),
        ])
        .split(area);
    let transcript_area = chunks[0];

    app.set_viewport_height(transcript_area.height as usize);

    draw_transcript(frame, app, transcript_area);
    if app.prompt_enabled {
        draw_prompt(frame, app, chunks[1]);
    }
    draw_status(frame, app, chunks[2]);

    if app.overlay_visible {
        draw_metrics_overlay(frame, app, area);
    }
    if app.form.active {
        draw_contact_form(frame, app, area);
    } else if let Some(tip) = app.tooltip() {
        let tip = tip.to_string();
        draw_tooltip(frame, app, transcript_area, &tip);
    }
}

fn line_style(app: &App, kind: &LineKind) -> Style {
    match kind {
        LineKind::Command => Style::default().fg(app.theme.primary),
        LineKind::Link { .. } => Style::default()
            .fg(app.theme.link)
            .add_modifier(Modifier::UNDERLINED),
        _ => Style::default().fg(app.theme.text),
    }
}

fn draw_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.total_lines();
    let transcript_len = app.transcript.len();
    let prompt = app.config.terminal.prompt.as_str();

    let mut rows: Vec<Line> = Vec::with_capacity(area.height as usize);
    let end = (app.scroll + area.height as usize).min(total);
    for idx in app.scroll..end {
        let (kind, text) = if idx < transcript_len {
            let line = &app.transcript.lines()[idx];
            (&line.kind, line.text.as_str())
        } else {
            let line = &app.tail[idx - transcript_len];
            (&line.kind, line.text.as_str())
        };

        // Unrevealed lines hold their place but draw nothing
        if !app.is_line_revealed(idx) {
            rows.push(Line::default());
            continue;
        }

        let mut style = line_style(app, kind);
        if app.focus == Focus::Browse && idx == app.selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let row = match kind {
            LineKind::Command => Line::from(vec![
                Span::styled(
                    prompt.to_string(),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {text}"), style),
            ]),
            _ => Line::from(Span::styled(text.to_string(), style)),
        };
        rows.push(row);
    }

    frame.render_widget(Paragraph::new(rows), area);
}

fn draw_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.focus == Focus::Prompt && !app.form.active;
    let cursor = if active && app.cursor_visible() {
        "\u{2588}"
    } else {
        " "
    };
    let prompt_style = Style::default()
        .fg(app.theme.primary)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(app.config.terminal.prompt.clone(), prompt_style),
        Span::styled(
            format!(" {}{cursor}", app.input),
            Style::default().fg(app.theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.status_message() {
        Some(msg) => (
            msg.to_string(),
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        None => {
            let hint = match app.focus {
                Focus::Prompt => "Enter: run  Tab: browse  Esc: leave prompt",
                Focus::Browse => {
                    "j/k: move  c: copy  o: open  m: metrics  f: contact  Tab: prompt  q: quit"
                }
            };
            (hint.to_string(), Style::default().fg(app.theme.border))
        }
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

fn draw_goodbye(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Connection closed.",
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thank you for visiting.",
            Style::default().fg(app.theme.text),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press any key to leave.",
            Style::default().fg(app.theme.border),
        )),
    ];
    let vertical_pad = area.height.saturating_sub(lines.len() as u16) / 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(vertical_pad), Constraint::Min(1)])
        .split(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}

/// Centered popup rect, as a percentage of the surrounding area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn draw_metrics_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    for project in &app.config.projects {
        let rows = metric_rows(&project.metrics);
        if rows.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        for table_line in table::render(&rows) {
            lines.push(Line::from(Span::styled(
                table_line,
                Style::default().fg(app.theme.text),
            )));
        }
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Project Metrics (m or Esc to close) ")
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_contact_form(frame: &mut Frame, app: &App, area: Rect) {
    let width = 56.min(area.width);
    let height = 9.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let form = &app.form;
    let mut lines: Vec<Line> = Vec::new();
    for (field, value) in [
        (crate::app::contact::FormField::Name, &form.name),
        (crate::app::contact::FormField::Email, &form.email),
        (crate::app::contact::FormField::Message, &form.message),
    ] {
        let active = form.field == field;
        let label_style = if active {
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        let cursor = if active && app.cursor_visible() {
            "\u{2588}"
        } else {
            ""
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", format!("{}:", field.label())), label_style),
            Span::styled(
                format!("{value}{cursor}"),
                Style::default().fg(app.theme.text),
            ),
        ]));
        lines.push(Line::default());
    }

    let footer = if form.submitting {
        "Sending..."
    } else {
        "Enter: send  Tab: next field  Esc: close"
    };
    lines.push(Line::from(Span::styled(
        footer,
        Style::default().fg(app.theme.border),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Get in touch ")
        .border_style(Style::default().fg(app.theme.primary))
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_tooltip(frame: &mut Frame, app: &App, transcript_area: Rect, tip: &str) {
    if app.selected < app.scroll {
        return;
    }
    let row_in_view = (app.selected - app.scroll) as u16;
    if row_in_view >= transcript_area.height {
        return;
    }
    let anchor_y = transcript_area.y + row_in_view;
    let anchor_x = transcript_area.x + 4;

    let width = (tip.width() as u16 + 4).min(transcript_area.width);
    let rect = tooltip::place(anchor_x, anchor_y, width, 3, transcript_area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {tip} "),
            Style::default().fg(app.theme.text),
        ))
        .block(block),
        rect,
    );
}
