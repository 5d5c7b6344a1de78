//! The thirteen Local Government Areas of Zamfara State and their wards.
//!
//! The `lga` column is a closed set: every stored record names one of these
//! areas. Ward lists are the known wards offered by the registration form;
//! a submitter whose ward is missing supplies a free-text name instead
//! (see [`crate::intake::WardChoice`]).

use serde::{Deserialize, Serialize};

/// A Local Government Area of Zamfara State.
///
/// Serialises to the human-readable area name (e.g. `"Birnin Magaji"`) —
/// the exact strings the store schema expects.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
pub enum Lga {
  Anka,
  Bakura,
  #[serde(rename = "Birnin Magaji")]
  #[strum(serialize = "Birnin Magaji")]
  BirninMagaji,
  Bungudu,
  Gummi,
  Gusau,
  #[serde(rename = "Kaura Namoda")]
  #[strum(serialize = "Kaura Namoda")]
  KauraNamoda,
  Maradun,
  Maru,
  Shinkafi,
  #[serde(rename = "Talata Mafara")]
  #[strum(serialize = "Talata Mafara")]
  TalataMafara,
  Tsafe,
  Zurmi,
}

impl Lga {
  /// All thirteen areas, in the order the registration form lists them.
  pub const ALL: [Lga; 13] = [
    Lga::Anka,
    Lga::Bakura,
    Lga::BirninMagaji,
    Lga::Bungudu,
    Lga::Gummi,
    Lga::Gusau,
    Lga::KauraNamoda,
    Lga::Maradun,
    Lga::Maru,
    Lga::Shinkafi,
    Lga::TalataMafara,
    Lga::Tsafe,
    Lga::Zurmi,
  ];

  /// The known wards of this area, as offered by the registration form.
  pub fn wards(self) -> &'static [&'static str] {
    match self {
      Lga::Anka => &["Anka Salami", "Waramu"],
      Lga::Bakura => &["Bakura Central", "Dakarko"],
      Lga::BirninMagaji => &["Birnin Magaji", "Kiyawa"],
      Lga::Bungudu => &["Bungudu Central", "Kwatarkwashi"],
      Lga::Gummi => &["Gummi Central", "Gayari"],
      Lga::Gusau => &["Galadima", "Madawaki", "Sabon Gari"],
      Lga::KauraNamoda => &["Kaura Central", "Kurya"],
      Lga::Maradun => &["Maradun North", "Dosara"],
      Lga::Maru => &["Maru Central", "Dansadau"],
      Lga::Shinkafi => &["Shinkafi North", "Katuru"],
      Lga::TalataMafara => &["Mafara Central", "Garbadu"],
      Lga::Tsafe => &["Tsafe Central", "Yandoto"],
      Lga::Zurmi => &["Zurmi Central", "Dauran"],
    }
  }
}
