//! Intake form handler — shapes raw form input into a [`NewRegistration`].
//!
//! The UI layer enforces required-field presence *before* building an
//! [`IntakeForm`]; this module does not re-validate. Its job is the two
//! normalisation rules:
//!
//! - ward resolution: a submitter who flagged "ward not listed" supplies a
//!   free-text ward name, which is stored instead of the select-control
//!   sentinel;
//! - benefit detail resolution: `benefit_details` is stored only when the
//!   benefited-before flag is set, and is emptied otherwise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  lga::Lga,
  registration::{EducationLevel, NewRegistration},
};

/// The option value the form's ward select uses for "+ WARD NOT LISTED".
/// This sentinel must never reach the store.
pub const WARD_NOT_LISTED: &str = "other";

// ─── WardChoice ──────────────────────────────────────────────────────────────

/// The submitter's ward selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WardChoice {
  /// A ward picked from the LGA's known list.
  Listed { ward: String },
  /// The submitter's ward was not listed; they typed its name.
  Unlisted { name: String },
}

impl WardChoice {
  /// Build a choice from the raw select value and the free-text field.
  ///
  /// The select control submits [`WARD_NOT_LISTED`] when the submitter
  /// flags their ward as missing; in that case the free-text value wins.
  pub fn from_selection(selected: &str, custom: Option<&str>) -> WardChoice {
    if selected == WARD_NOT_LISTED {
      WardChoice::Unlisted {
        name: custom.unwrap_or_default().to_owned(),
      }
    } else {
      WardChoice::Listed {
        ward: selected.to_owned(),
      }
    }
  }

  fn into_ward(self) -> String {
    match self {
      WardChoice::Listed { ward } => ward,
      WardChoice::Unlisted { name } => name,
    }
  }
}

// ─── IntakeForm ──────────────────────────────────────────────────────────────

/// Raw form fields plus the two derived UI selections (chosen LGA, ward
/// choice). Required-field constraints are presented by the caller before
/// this type is constructed.
#[derive(Debug, Clone)]
pub struct IntakeForm {
  pub full_name:       String,
  pub email:           String,
  pub phone_number:    String,
  pub nin_number:      String,
  pub dob:             NaiveDate,
  pub education_level: EducationLevel,
  pub lga:             Lga,
  pub ward:            WardChoice,
  pub benefited_before: bool,
  /// Whatever the submitter typed into the details field, listened to only
  /// when `benefited_before` is set.
  pub benefit_details: String,
}

impl IntakeForm {
  /// Produce the single [`NewRegistration`] this form describes.
  pub fn into_registration(self) -> NewRegistration {
    let benefit_details = if self.benefited_before {
      self.benefit_details
    } else {
      String::new()
    };

    NewRegistration {
      full_name: self.full_name,
      email: self.email,
      phone_number: self.phone_number,
      nin_number: self.nin_number,
      dob: self.dob,
      education_level: self.education_level,
      lga: self.lga,
      ward: self.ward.into_ward(),
      benefited_before: self.benefited_before,
      benefit_details,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(ward: WardChoice) -> IntakeForm {
    IntakeForm {
      full_name:       "Aisha Bello".into(),
      email:           "aisha@example.com".into(),
      phone_number:    "08030000000".into(),
      nin_number:      "12345678901".into(),
      dob:             NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
      education_level: EducationLevel::Ssce,
      lga:             Lga::Gusau,
      ward,
      benefited_before: false,
      benefit_details: String::new(),
    }
  }

  #[test]
  fn listed_ward_is_stored_as_selected() {
    let reg = form(WardChoice::Listed {
      ward: "Galadima".into(),
    })
    .into_registration();
    assert_eq!(reg.ward, "Galadima");
  }

  #[test]
  fn unlisted_ward_stores_free_text_never_the_sentinel() {
    let choice = WardChoice::from_selection(WARD_NOT_LISTED, Some("Tudun Wada"));
    assert_eq!(choice, WardChoice::Unlisted {
      name: "Tudun Wada".into(),
    });

    let reg = form(choice).into_registration();
    assert_eq!(reg.ward, "Tudun Wada");
    assert_ne!(reg.ward, WARD_NOT_LISTED);
  }

  #[test]
  fn listed_selection_ignores_the_custom_field() {
    let choice = WardChoice::from_selection("Madawaki", Some("stale text"));
    assert_eq!(choice, WardChoice::Listed {
      ward: "Madawaki".into(),
    });
  }

  #[test]
  fn benefit_details_cleared_when_not_benefited() {
    let mut f = form(WardChoice::Listed {
      ward: "Galadima".into(),
    });
    f.benefited_before = false;
    f.benefit_details = "stray input left in the field".into();
    assert_eq!(f.into_registration().benefit_details, "");
  }

  #[test]
  fn benefit_details_kept_when_benefited() {
    let mut f = form(WardChoice::Listed {
      ward: "Galadima".into(),
    });
    f.benefited_before = true;
    f.benefit_details = "2023 fertiliser programme".into();
    let reg = f.into_registration();
    assert!(reg.benefited_before);
    assert_eq!(reg.benefit_details, "2023 fertiliser programme");
  }
}
