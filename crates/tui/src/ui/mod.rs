use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Entry};
use crate::strings::{build_status_line, PREFIX_INPUT, TITLE_INPUT, TITLE_OUTPUT};
use crate::theme::THEME;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());
    draw_transcript(f, chunks[0], app);
    draw_input(f, chunks[1], app);
    draw_status(f, chunks[2], app);
}

fn draw_transcript(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(TITLE_OUTPUT)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border_inactive));
    let inner_h = area.height.saturating_sub(2) as usize;
    // Newest output sticks to the bottom.
    let start = app.transcript.len().saturating_sub(inner_h);
    let lines: Vec<Line> = app.transcript[start..]
        .iter()
        .map(|e| match e {
            Entry::Input(s) => Line::from(vec![
                Span::styled(PREFIX_INPUT, Style::default().fg(THEME.echo_input)),
                Span::raw(s.as_str()),
            ]),
            Entry::Output(s) => Line::from(s.as_str()),
            Entry::Error(s) => Line::from(Span::styled(s.as_str(), Style::default().fg(THEME.error))),
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn cursor_style(lit: bool) -> Style {
    if lit {
        Style::default()
            .fg(THEME.cursor_fg)
            .bg(THEME.cursor_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn draw_input(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.input.is_focused();
    let border_style = if focused {
        Style::default().fg(THEME.border_focus)
    } else {
        Style::default().fg(THEME.border_inactive)
    };
    let block = Block::default()
        .title(TITLE_INPUT)
        .borders(Borders::ALL)
        .border_style(border_style);

    let view = app.view();
    let prompt = app.config.prompt.as_str();
    let cursor_end = UnicodeWidthStr::width(prompt)
        + UnicodeWidthStr::width(view.before.as_str())
        + UnicodeWidthStr::width(view.on.as_str()).max(1);
    let inner_w = area.width.saturating_sub(2) as usize;
    let offset_x = cursor_end.saturating_sub(inner_w) as u16;

    let lit = app.cursor_lit(&view);
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(THEME.prompt)),
        Span::raw(view.before),
        Span::styled(view.on, cursor_style(lit)),
        Span::raw(view.after),
    ]);
    let para = Paragraph::new(line).block(block).scroll((0, offset_x));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let col_disp = UnicodeWidthStr::width(view.before.as_str()) + 1;
    let tips = build_status_line(
        col_disp,
        app.history.len(),
        app.history.browse_index(),
        app.input.is_focused(),
        area.width.saturating_sub(2),
    );
    let help = Span::styled(tips, Style::default().fg(THEME.border_inactive));
    let para = Paragraph::new(Line::from(vec![help])).block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}
