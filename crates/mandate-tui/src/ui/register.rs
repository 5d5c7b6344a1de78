//! Registration form pane.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Field};

/// Render the registration form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let form = &app.register;
  let focused = form.focused();

  let block = Block::default()
    .title(" REGISTER CREDENTIALS ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = vec![Line::from("")];
  for field in form.visible_fields() {
    lines.push(render_row(form, field, field == focused));
    lines.push(Line::from(""));
  }

  f.render_widget(Paragraph::new(lines), inner);
}

fn render_row(
  form: &crate::app::RegisterForm,
  field: Field,
  focused: bool,
) -> Line<'static> {
  let label_style = if focused {
    Style::default()
      .fg(Color::Yellow)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let value_style = if focused {
    Style::default().add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };

  // The submit row is a button, not a label/value pair.
  if field == Field::Submit {
    let style = if focused {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Green)
    };
    return Line::from(vec![
      Span::raw("  "),
      Span::styled(format!("[ {} ]", field.label()), style),
    ]);
  }

  let value = match field {
    Field::FullName => text_value(&form.full_name, focused),
    Field::Email => text_value(&form.email, focused),
    Field::Phone => text_value(&form.phone_number, focused),
    Field::Dob => text_value(&form.dob, focused),
    Field::Nin => text_value(&form.nin_number, focused),
    Field::CustomWard => text_value(&form.custom_ward, focused),
    Field::BenefitDetails => text_value(&form.benefit_details, focused),
    Field::Education => select_value(&form.selected_education().to_string()),
    Field::Lga => select_value(&form.selected_lga().to_string()),
    Field::Ward => select_value(&form.ward_value()),
    Field::Benefited => {
      select_value(if form.benefited_before { "YES" } else { "NO" })
    }
    Field::Submit => unreachable!(),
  };

  Line::from(vec![
    Span::raw("  "),
    Span::styled(format!("{:<28}", field.label()), label_style),
    Span::styled(value, value_style),
  ])
}

fn text_value(value: &str, focused: bool) -> String {
  if focused {
    format!("{value}_")
  } else {
    value.to_owned()
  }
}

fn select_value(value: &str) -> String { format!("◂ {value} ▸") }
