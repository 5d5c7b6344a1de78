//! Application state machine and event dispatcher.
//!
//! Navigation is explicit state: the current [`View`] lives on [`App`] and
//! every transition goes through the key handler. The admin authenticated
//! flag is granted once per process by the access gate and is never
//! persisted anywhere.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use mandate_core::{
  intake::{IntakeForm, WARD_NOT_LISTED, WardChoice},
  lga::Lga,
  registration::{EducationLevel, RegistrationRecord},
  report::{LgaCount, lga_counts},
};

use crate::client::ApiClient;

// ─── View ────────────────────────────────────────────────────────────────────

/// The seven site views, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
  Home,
  About,
  Projects,
  Agenda,
  Register,
  Contact,
  Admin,
}

impl View {
  pub const ALL: [View; 7] = [
    View::Home,
    View::About,
    View::Projects,
    View::Agenda,
    View::Register,
    View::Contact,
    View::Admin,
  ];

  pub fn title(self) -> &'static str {
    match self {
      View::Home => "HOME",
      View::About => "ABOUT",
      View::Projects => "PROJECTS",
      View::Agenda => "AGENDA",
      View::Register => "REGISTER",
      View::Contact => "CONTACT",
      View::Admin => "ADMIN",
    }
  }
}

// ─── Registration form ───────────────────────────────────────────────────────

/// A row of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  FullName,
  Email,
  Phone,
  Dob,
  Nin,
  Education,
  Lga,
  Ward,
  CustomWard,
  Benefited,
  BenefitDetails,
  Submit,
}

impl Field {
  pub fn label(self) -> &'static str {
    match self {
      Field::FullName => "FULL NAME",
      Field::Email => "EMAIL ADDRESS",
      Field::Phone => "PHONE NUMBER",
      Field::Dob => "DATE OF BIRTH (YYYY-MM-DD)",
      Field::Nin => "NIN NUMBER",
      Field::Education => "EDUCATION LEVEL",
      Field::Lga => "SELECT LGA",
      Field::Ward => "SELECT WARD",
      Field::CustomWard => "ENTER WARD NAME",
      Field::Benefited => "BENEFITED BEFORE?",
      Field::BenefitDetails => "BENEFIT DETAILS",
      Field::Submit => "SUBMIT TO DATABASE",
    }
  }

}

/// Editable state of the registration form.
pub struct RegisterForm {
  pub cursor:          usize,
  pub full_name:       String,
  pub email:           String,
  pub phone_number:    String,
  pub dob:             String,
  pub nin_number:      String,
  pub education_idx:   usize,
  pub lga_idx:         usize,
  /// Index into the selected LGA's ward list; one past the end means
  /// "+ WARD NOT LISTED".
  pub ward_idx:        usize,
  pub custom_ward:     String,
  pub benefited_before: bool,
  pub benefit_details: String,
}

impl Default for RegisterForm {
  fn default() -> Self {
    Self {
      cursor: 0,
      full_name: String::new(),
      email: String::new(),
      phone_number: String::new(),
      dob: String::new(),
      nin_number: String::new(),
      education_idx: 0,
      lga_idx: 0,
      ward_idx: 0,
      custom_ward: String::new(),
      benefited_before: false,
      benefit_details: String::new(),
    }
  }
}

impl RegisterForm {
  pub fn selected_lga(&self) -> Lga { Lga::ALL[self.lga_idx] }

  pub fn selected_education(&self) -> EducationLevel {
    EducationLevel::ALL[self.education_idx]
  }

  pub fn ward_is_other(&self) -> bool {
    self.ward_idx == self.selected_lga().wards().len()
  }

  /// Display string for the ward select.
  pub fn ward_value(&self) -> String {
    if self.ward_is_other() {
      "+ WARD NOT LISTED".to_owned()
    } else {
      self.selected_lga().wards()[self.ward_idx].to_owned()
    }
  }

  /// The rows currently shown, in order. The custom-ward and benefit-detail
  /// rows appear only when their toggles make them meaningful.
  pub fn visible_fields(&self) -> Vec<Field> {
    let mut fields = vec![
      Field::FullName,
      Field::Email,
      Field::Phone,
      Field::Dob,
      Field::Nin,
      Field::Education,
      Field::Lga,
      Field::Ward,
    ];
    if self.ward_is_other() {
      fields.push(Field::CustomWard);
    }
    fields.push(Field::Benefited);
    if self.benefited_before {
      fields.push(Field::BenefitDetails);
    }
    fields.push(Field::Submit);
    fields
  }

  pub fn focused(&self) -> Field {
    let fields = self.visible_fields();
    fields[self.cursor.min(fields.len() - 1)]
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible_fields().len();
    if self.cursor >= len {
      self.cursor = len - 1;
    }
  }

  fn move_down(&mut self) {
    if self.cursor + 1 < self.visible_fields().len() {
      self.cursor += 1;
    }
  }

  fn move_up(&mut self) {
    if self.cursor > 0 {
      self.cursor -= 1;
    }
  }

  fn text_mut(&mut self) -> Option<&mut String> {
    match self.focused() {
      Field::FullName => Some(&mut self.full_name),
      Field::Email => Some(&mut self.email),
      Field::Phone => Some(&mut self.phone_number),
      Field::Dob => Some(&mut self.dob),
      Field::Nin => Some(&mut self.nin_number),
      Field::CustomWard => Some(&mut self.custom_ward),
      Field::BenefitDetails => Some(&mut self.benefit_details),
      _ => None,
    }
  }

  /// Cycle the focused select (or toggle the benefited flag).
  fn cycle(&mut self, delta: isize) {
    match self.focused() {
      Field::Education => {
        self.education_idx = wrap(self.education_idx, delta, EducationLevel::ALL.len());
      }
      Field::Lga => {
        self.lga_idx = wrap(self.lga_idx, delta, Lga::ALL.len());
        // A new LGA means a new ward list.
        self.ward_idx = 0;
        self.clamp_cursor();
      }
      Field::Ward => {
        let options = self.selected_lga().wards().len() + 1;
        self.ward_idx = wrap(self.ward_idx, delta, options);
        self.clamp_cursor();
      }
      Field::Benefited => {
        self.benefited_before = !self.benefited_before;
        self.clamp_cursor();
      }
      _ => {}
    }
  }

  /// Enforce the required-field constraints and build the intake form.
  ///
  /// This is the UI layer's half of the contract: the intake handler itself
  /// does not re-validate.
  pub fn to_intake(&self) -> Result<IntakeForm, String> {
    for (value, field) in [
      (&self.full_name, Field::FullName),
      (&self.email, Field::Email),
      (&self.phone_number, Field::Phone),
      (&self.nin_number, Field::Nin),
    ] {
      if value.trim().is_empty() {
        return Err(format!("{} is required.", field.label()));
      }
    }

    let dob = chrono::NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d")
      .map_err(|_| "DATE OF BIRTH must be YYYY-MM-DD.".to_owned())?;

    if self.ward_is_other() && self.custom_ward.trim().is_empty() {
      return Err("ENTER WARD NAME is required.".to_owned());
    }

    let selected = if self.ward_is_other() {
      WARD_NOT_LISTED.to_owned()
    } else {
      self.selected_lga().wards()[self.ward_idx].to_owned()
    };

    Ok(IntakeForm {
      full_name:       self.full_name.trim().to_owned(),
      email:           self.email.trim().to_owned(),
      phone_number:    self.phone_number.trim().to_owned(),
      nin_number:      self.nin_number.trim().to_owned(),
      dob,
      education_level: self.selected_education(),
      lga:             self.selected_lga(),
      ward:            WardChoice::from_selection(&selected, Some(self.custom_ward.trim())),
      benefited_before: self.benefited_before,
      benefit_details: self.benefit_details.clone(),
    })
  }
}

fn wrap(current: usize, delta: isize, len: usize) -> usize {
  let len = len as isize;
  (((current as isize + delta) % len + len) % len) as usize
}

// ─── Admin state ─────────────────────────────────────────────────────────────

/// Dashboard state. The record list is replaced wholesale on every fetch —
/// there is no incremental merge.
pub struct AdminState {
  /// Lit by the access gate; lives for the process lifetime only.
  pub authenticated: bool,
  /// The operator secret — input buffer before authentication, then kept in
  /// memory to authenticate each admin request for this session.
  pub secret:  String,
  pub records: Vec<RegistrationRecord>,
  pub counts:  Vec<LgaCount>,
  pub filter:  String,
  pub filter_active: bool,
  pub cursor:  usize,
}

impl Default for AdminState {
  fn default() -> Self {
    Self {
      authenticated: false,
      secret: String::new(),
      records: Vec::new(),
      counts: Vec::new(),
      filter: String::new(),
      filter_active: false,
      cursor: 0,
    }
  }
}

impl AdminState {
  /// Records matching the current fuzzy filter over name and email.
  pub fn filtered_records(&self) -> Vec<&RegistrationRecord> {
    if self.filter.is_empty() {
      return self.records.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    self
      .records
      .iter()
      .filter(|r| {
        matcher.fuzzy_match(&r.full_name, &self.filter).is_some()
          || matcher.fuzzy_match(&r.email, &self.filter).is_some()
      })
      .collect()
  }
}

// ─── App ─────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current view — the only navigation state there is.
  pub view: View,

  pub register: RegisterForm,

  /// Whether the confirmation overlay is up after a successful submission.
  pub submitted: bool,

  pub admin: AdminState,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      view: View::Home,
      register: RegisterForm::default(),
      submitted: false,
      admin: AdminState::default(),
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Data flow ─────────────────────────────────────────────────────────────

  /// Submit the registration form. Success raises the confirmation overlay;
  /// failures (duplicate or store) land in the status bar as a blocking
  /// notification. Nothing is retried.
  async fn submit(&mut self) {
    let form = match self.register.to_intake() {
      Ok(f) => f,
      Err(msg) => {
        self.status_msg = msg;
        return;
      }
    };

    match self.client.register(&form.into_registration()).await {
      Ok(_) => {
        self.submitted = true;
        self.status_msg = String::new();
      }
      Err(e) => self.status_msg = e.to_string(),
    }
  }

  /// Present the typed secret to the access gate.
  async fn login(&mut self) {
    match self.client.open_session(&self.admin.secret).await {
      Ok(true) => {
        self.admin.authenticated = true;
        self.status_msg = String::new();
        self.refresh_admin().await;
      }
      Ok(false) => self.status_msg = "Invalid Access Credentials.".to_owned(),
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  /// Fetch the full record set and recompute the chart. The previous list
  /// is replaced wholesale; fetch failures surface in the status bar.
  pub async fn refresh_admin(&mut self) {
    match self.client.list_registrations(&self.admin.secret).await {
      Ok(records) => {
        self.admin.counts = lga_counts(&records);
        self.admin.records = records;
        self.admin.cursor = 0;
        self.status_msg = String::new();
      }
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    // Confirmation overlay swallows everything until dismissed.
    if self.submitted {
      if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        self.submitted = false;
        self.register = RegisterForm::default();
        self.view = View::Home;
      }
      return Ok(true);
    }

    match self.view {
      View::Register => self.handle_register_key(key).await,
      View::Admin => self.handle_admin_key(key).await,
      _ => Ok(self.handle_info_key(key)),
    }
  }

  /// Digits 1-7 jump straight to a view, matching the menu order.
  fn digit_nav(&mut self, code: KeyCode) -> bool {
    if let KeyCode::Char(c) = code
      && let Some(n) = c.to_digit(10)
      && (1..=View::ALL.len() as u32).contains(&n)
    {
      self.view = View::ALL[(n - 1) as usize];
      self.status_msg = String::new();
      return true;
    }
    false
  }

  fn handle_info_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => false,
      code => {
        self.digit_nav(code);
        true
      }
    }
  }

  async fn handle_register_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        self.view = View::Home;
        self.status_msg = String::new();
      }
      KeyCode::Down | KeyCode::Tab => self.register.move_down(),
      KeyCode::Up | KeyCode::BackTab => self.register.move_up(),
      KeyCode::Left => self.register.cycle(-1),
      KeyCode::Right => self.register.cycle(1),
      KeyCode::Enter => {
        if self.register.focused() == Field::Submit {
          self.submit().await;
        } else {
          self.register.move_down();
        }
      }
      KeyCode::Char(' ') if self.register.focused() == Field::Benefited => {
        self.register.cycle(1);
      }
      KeyCode::Backspace => {
        if let Some(text) = self.register.text_mut() {
          text.pop();
        }
      }
      KeyCode::Char(c) => {
        if let Some(text) = self.register.text_mut() {
          text.push(c);
        }
      }
      _ => {}
    }
    Ok(true)
  }

  async fn handle_admin_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    if !self.admin.authenticated {
      match key.code {
        KeyCode::Esc => {
          self.view = View::Home;
          self.admin.secret.clear();
          self.status_msg = String::new();
        }
        KeyCode::Enter => self.login().await,
        KeyCode::Backspace => {
          self.admin.secret.pop();
        }
        KeyCode::Char(c) => self.admin.secret.push(c),
        _ => {}
      }
      return Ok(true);
    }

    // Filter input mode: printable keys go into the filter string.
    if self.admin.filter_active {
      match key.code {
        KeyCode::Esc => {
          self.admin.filter_active = false;
          self.admin.filter.clear();
          self.admin.cursor = 0;
        }
        KeyCode::Enter => self.admin.filter_active = false,
        KeyCode::Backspace => {
          self.admin.filter.pop();
          self.admin.cursor = 0;
        }
        KeyCode::Char(c) => {
          self.admin.filter.push(c);
          self.admin.cursor = 0;
        }
        _ => {}
      }
      return Ok(true);
    }

    match key.code {
      KeyCode::Char('q') => return Ok(false),
      // Leaving the dashboard does not drop the session flag.
      KeyCode::Esc => self.view = View::Home,
      KeyCode::Char('r') => self.refresh_admin().await,
      KeyCode::Char('/') => {
        self.admin.filter_active = true;
        self.admin.filter.clear();
        self.admin.cursor = 0;
      }
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.admin.filtered_records().len();
        if len > 0 && self.admin.cursor + 1 < len {
          self.admin.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.admin.cursor > 0 {
          self.admin.cursor -= 1;
        }
      }
      code => {
        self.digit_nav(code);
      }
    }
    Ok(true)
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent};
  use mandate_core::intake::WardChoice;

  use super::*;
  use crate::client::{ApiClient, ApiConfig};

  fn app() -> App {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:8328".into(),
    })
    .unwrap();
    App::new(client)
  }

  fn filled_form() -> RegisterForm {
    RegisterForm {
      full_name: "Aisha Bello".into(),
      email: "aisha@example.com".into(),
      phone_number: "08030000000".into(),
      dob: "1995-04-12".into(),
      nin_number: "12345678901".into(),
      ..RegisterForm::default()
    }
  }

  // ── Navigation ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn digits_jump_between_views() {
    let mut a = app();
    assert_eq!(a.view, View::Home);

    a.handle_key(KeyEvent::from(KeyCode::Char('5'))).await.unwrap();
    assert_eq!(a.view, View::Register);

    a.handle_key(KeyEvent::from(KeyCode::Esc)).await.unwrap();
    assert_eq!(a.view, View::Home);

    a.handle_key(KeyEvent::from(KeyCode::Char('7'))).await.unwrap();
    assert_eq!(a.view, View::Admin);
  }

  #[tokio::test]
  async fn session_flag_survives_leaving_the_dashboard() {
    let mut a = app();
    a.view = View::Admin;
    a.admin.authenticated = true;

    a.handle_key(KeyEvent::from(KeyCode::Esc)).await.unwrap();
    assert_eq!(a.view, View::Home);
    assert!(a.admin.authenticated);
  }

  #[tokio::test]
  async fn typing_goes_into_the_focused_field() {
    let mut a = app();
    a.view = View::Register;
    for c in "Aisha".chars() {
      a.handle_key(KeyEvent::from(KeyCode::Char(c))).await.unwrap();
    }
    assert_eq!(a.register.full_name, "Aisha");
  }

  // ── Form validation + intake ──────────────────────────────────────────────

  #[test]
  fn empty_name_is_rejected_before_intake() {
    let mut form = filled_form();
    form.full_name.clear();
    let err = form.to_intake().unwrap_err();
    assert!(err.contains("FULL NAME"));
  }

  #[test]
  fn malformed_dob_is_rejected_before_intake() {
    let mut form = filled_form();
    form.dob = "12/04/1995".into();
    assert!(form.to_intake().is_err());
  }

  #[test]
  fn listed_ward_flows_through() {
    let form = filled_form();
    let intake = form.to_intake().unwrap();
    assert_eq!(intake.lga, Lga::Anka);
    assert_eq!(intake.ward, WardChoice::Listed {
      ward: "Anka Salami".into(),
    });
  }

  #[test]
  fn unlisted_ward_requires_and_uses_the_typed_name() {
    let mut form = filled_form();
    form.ward_idx = form.selected_lga().wards().len();
    assert!(form.ward_is_other());
    assert!(form.to_intake().is_err());

    form.custom_ward = "Tudun Wada".into();
    let reg = form.to_intake().unwrap().into_registration();
    assert_eq!(reg.ward, "Tudun Wada");
  }

  #[test]
  fn changing_lga_resets_the_ward_selection() {
    let mut form = filled_form();
    form.cursor = form
      .visible_fields()
      .iter()
      .position(|f| *f == Field::Ward)
      .unwrap();
    form.cycle(1);
    assert_eq!(form.ward_idx, 1);

    form.cursor = form
      .visible_fields()
      .iter()
      .position(|f| *f == Field::Lga)
      .unwrap();
    form.cycle(1);
    assert_eq!(form.ward_idx, 0);
  }

  #[test]
  fn benefit_details_row_only_when_toggled() {
    let mut form = filled_form();
    assert!(!form.visible_fields().contains(&Field::BenefitDetails));

    form.benefited_before = true;
    assert!(form.visible_fields().contains(&Field::BenefitDetails));
  }

  // ── Admin filter ──────────────────────────────────────────────────────────

  #[test]
  fn filter_narrows_the_record_table() {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    let mut admin = AdminState::default();
    for name in ["Aisha Bello", "Musa Garba"] {
      admin.records.push(RegistrationRecord {
        registration_id: Uuid::new_v4(),
        full_name:       name.into(),
        email:           format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone_number:    "08030000000".into(),
        nin_number:      name.into(),
        dob:             NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        education_level: EducationLevel::Bsc,
        lga:             Lga::Gusau,
        ward:            "Galadima".into(),
        benefited_before: false,
        benefit_details: String::new(),
        created_at:      Utc::now(),
      });
    }

    assert_eq!(admin.filtered_records().len(), 2);
    admin.filter = "musa".into();
    let filtered = admin.filtered_records();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].full_name, "Musa Garba");
  }
}
