//! Admin dashboard pane: access prompt, LGA chart and record table.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table,
    TableState,
  },
};

use crate::app::App;

/// Render the admin view into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  if !app.admin.authenticated {
    draw_access_prompt(f, area, app);
    return;
  }
  draw_dashboard(f, area, app);
}

// ─── Access prompt ────────────────────────────────────────────────────────────

fn draw_access_prompt(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" RESTRICTED ACCESS ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let masked = "•".repeat(app.admin.secret.chars().count());
  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      "Enter the operator secret to open the dashboard.",
      Style::default().fg(Color::DarkGray),
    )),
    Line::from(""),
    Line::from(vec![
      Span::styled("SECRET  ", Style::default().fg(Color::Yellow)),
      Span::styled(
        format!("{masked}_"),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Dashboard ────────────────────────────────────────────────────────────────

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),  // totals
      Constraint::Length(10), // chart
      Constraint::Min(0),     // table
    ])
    .split(area);

  draw_totals(f, rows[0], app);
  draw_chart(f, rows[1], app);
  draw_table(f, rows[2], app);
}

fn draw_totals(f: &mut Frame, area: Rect, app: &App) {
  let text = format!(" TOTAL REGISTRATIONS: {}", app.admin.records.len());
  f.render_widget(
    Paragraph::new(Span::styled(
      text,
      Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD),
    )),
    area,
  );
}

/// Bar chart of registrations per LGA, in first-seen order.
fn draw_chart(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" REGISTRATIONS BY LGA ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let bars: Vec<Bar> = app
    .admin
    .counts
    .iter()
    .map(|c| {
      Bar::default()
        .label(Line::from(c.name.to_string()))
        .value(c.count)
    })
    .collect();

  let chart = BarChart::default()
    .block(block)
    .bar_width(9)
    .bar_gap(1)
    .bar_style(Style::default().fg(Color::Green))
    .value_style(
      Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD),
    )
    .data(BarGroup::default().bars(&bars));

  f.render_widget(chart, area);
}

fn draw_table(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.admin.filtered_records();

  let title = if app.admin.filter_active || !app.admin.filter.is_empty() {
    format!(" RECORDS ({}/{}) ", filtered.len(), app.admin.records.len())
  } else {
    format!(" RECORDS ({}) ", app.admin.records.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner = block.inner(area);
  f.render_widget(block, area);

  // Filter bar at the bottom of the pane when active or set.
  if (app.admin.filter_active || !app.admin.filter.is_empty())
    && inner.height > 2
  {
    let filter_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);

    let filter_text = if app.admin.filter_active {
      format!("/{}_", app.admin.filter)
    } else {
      format!("/{}", app.admin.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let header = Row::new(
    ["NAME", "EMAIL", "LGA", "WARD", "REGISTERED"]
      .map(|h| Cell::from(Span::styled(h, Style::default().fg(Color::Yellow)))),
  );

  let rows: Vec<Row> = filtered
    .iter()
    .map(|r| {
      Row::new(vec![
        Cell::from(r.full_name.clone()),
        Cell::from(r.email.clone()),
        Cell::from(r.lga.to_string()),
        Cell::from(r.ward.clone()),
        Cell::from(r.created_at.format("%Y-%m-%d %H:%M").to_string()),
      ])
    })
    .collect();

  let mut state = TableState::default();
  state.select(if filtered.is_empty() {
    None
  } else {
    Some(app.admin.cursor.min(filtered.len() - 1))
  });

  let table = Table::new(rows, [
    Constraint::Percentage(24),
    Constraint::Percentage(28),
    Constraint::Percentage(16),
    Constraint::Percentage(16),
    Constraint::Percentage(16),
  ])
  .header(header)
  .row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  f.render_stateful_widget(table, inner, &mut state);
}
