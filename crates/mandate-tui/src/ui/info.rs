//! Static informational views: home, about, projects, agenda, contact.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::View;

pub fn draw(f: &mut Frame, area: Rect, view: View) {
  let (title, lines) = match view {
    View::Home => ("JAGABAN ZAMFARA", home_lines()),
    View::About => ("THE VISIONARY", about_lines()),
    View::Projects => ("MAJOR INITIATIVES", projects_lines()),
    View::Agenda => ("THE 2031 AGENDA", agenda_lines()),
    View::Contact => ("CONTACT", contact_lines()),
    // Register and Admin have their own renderers.
    View::Register | View::Admin => return,
  };

  let block = Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn heading(text: &str) -> Line<'_> {
  Line::from(Span::styled(
    text,
    Style::default()
      .fg(Color::Green)
      .add_modifier(Modifier::BOLD),
  ))
}

fn accent(text: &str) -> Line<'_> {
  Line::from(Span::styled(
    text,
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ))
}

fn home_lines() -> Vec<Line<'static>> {
  vec![
    Line::from(""),
    accent("THE PEOPLE'S MANDATE"),
    Line::from(""),
    heading("JAGABAN ZAMFARA"),
    Line::from(""),
    Line::from("Leading with Purpose. Building for Generations."),
    Line::from(""),
    Line::from(Span::styled(
      "Press [5] to JOIN THE MOVEMENT.",
      Style::default().add_modifier(Modifier::BOLD),
    )),
  ]
}

fn about_lines() -> Vec<Line<'static>> {
  vec![
    Line::from(""),
    Line::from(
      "Jagaban Zamfara is a distinguished philanthropist, a strategic \
       political leader, and a dedicated social advocate committed to the \
       holistic development of Zamfara State.",
    ),
    Line::from(""),
    Line::from(
      "Driven by a mission of service, his work through the KLM Foundation \
       focuses on creating sustainable pathways for the youth, providing \
       equitable educational resources, and fostering grassroots innovation.",
    ),
    Line::from(""),
    Line::from(
      "As a visionary leader, he prioritizes data-driven social impact, \
       ensuring that every initiative reaches those who need it most.",
    ),
  ]
}

fn projects_lines() -> Vec<Line<'static>> {
  vec![
    Line::from(""),
    accent("EDUCATIONAL OUTREACH"),
    Line::from("Equitable Access to Resources"),
    Line::from(""),
    Line::from(
      "The strategic allocation of educational resources within the public \
       secondary school system of Birnin Magaji local government.",
    ),
  ]
}

fn agenda_lines() -> Vec<Line<'static>> {
  vec![
    Line::from(""),
    accent("VISIONARY 2031"),
    Line::from(""),
    Line::from("Youth empowerment through skills and enterprise."),
    Line::from("Equitable educational resources in every local government."),
    Line::from("Grassroots innovation and data-driven social impact."),
  ]
}

fn contact_lines() -> Vec<Line<'static>> {
  vec![
    Line::from(""),
    accent("KLM FOUNDATION"),
    Line::from(""),
    Line::from("Gusau, Zamfara State, Nigeria."),
    Line::from(""),
    Line::from("Find the movement on Twitter, Instagram and Facebook."),
  ]
}
