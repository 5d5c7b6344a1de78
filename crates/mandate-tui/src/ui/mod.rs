//! TUI rendering — orchestrates all panes.

pub mod admin;
pub mod info;
pub mod register;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, View};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, menu, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(1), // menu
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_menu(f, rows[1], app);
  draw_body(f, rows[2], app);
  draw_status(f, rows[3], app);

  if app.submitted {
    draw_submitted_overlay(f, area);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " KLM FOUNDATION — THE PEOPLE'S MANDATE",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Menu ─────────────────────────────────────────────────────────────────────

/// One-line menu: `[1] HOME  [2] ABOUT …`, with the current view highlighted.
fn draw_menu(f: &mut Frame, area: Rect, app: &App) {
  let mut spans = vec![Span::raw(" ")];
  for (i, view) in View::ALL.iter().enumerate() {
    let style = if *view == app.view {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(format!("[{}] {}", i + 1, view.title()), style));
    spans.push(Span::raw("  "));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  match app.view {
    View::Register => register::draw(f, area, app),
    View::Admin => admin::draw(f, area, app),
    view => info::draw(f, area, view),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.view {
    View::Register => (
      "FORM",
      "↑↓/Tab fields  ←→ cycle  Enter submit  Esc home  1-7 only in admin/info",
    ),
    View::Admin if !app.admin.authenticated => {
      ("ACCESS", "Type secret  Enter verify  Esc home")
    }
    View::Admin if app.admin.filter_active => {
      ("SEARCH", "Type to filter  Esc cancel  Enter keep")
    }
    View::Admin => (
      "ADMIN",
      "↑↓/jk rows  r refresh  / filter  Esc home  q quit",
    ),
    _ => ("NORMAL", "1-7 switch view  q quit"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let body_style = if app.status_msg.is_empty() {
    Style::default().fg(Color::DarkGray)
  } else {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
  };
  let hint_span = Span::styled(format!("  {status}"), body_style);

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Submission overlay ───────────────────────────────────────────────────────

/// Centered confirmation box shown after a successful submission. Blocks all
/// input until dismissed.
fn draw_submitted_overlay(f: &mut Frame, area: Rect) {
  let width = 46.min(area.width);
  let height = 7.min(area.height);
  let popup = Rect {
    x:      area.x + (area.width.saturating_sub(width)) / 2,
    y:      area.y + (area.height.saturating_sub(height)) / 2,
    width,
    height,
  };

  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(" REGISTERED ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Green));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      "Your registration has been recorded.",
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
    Line::from(Span::styled(
      "Press Enter to return home.",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(
    Paragraph::new(lines)
      .alignment(ratatui::layout::Alignment::Center)
      .wrap(Wrap { trim: true }),
    inner,
  );
}
