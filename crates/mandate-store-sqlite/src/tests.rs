//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use mandate_core::{
  Error as CoreError,
  intake::{IntakeForm, WARD_NOT_LISTED, WardChoice},
  lga::Lga,
  registration::{EducationLevel, NewRegistration},
  report::lga_counts,
  store::{RegistrationStore, StoreError},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn registration(email: &str, nin: &str, lga: Lga) -> NewRegistration {
  NewRegistration {
    full_name:       "Aisha Bello".into(),
    email:           email.into(),
    phone_number:    "08030000000".into(),
    nin_number:      nin.into(),
    dob:             NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
    education_level: EducationLevel::Ssce,
    lga,
    ward:            lga.wards()[0].into(),
    benefited_before: false,
    benefit_details: String::new(),
  }
}

// ─── Insert + list ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_list_roundtrip() {
  let s = store().await;

  let stored = s
    .insert(registration("aisha@example.com", "11111111111", Lga::Gusau))
    .await
    .unwrap();
  assert_eq!(stored.email, "aisha@example.com");
  assert_eq!(stored.lga, Lga::Gusau);

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  let got = &all[0];
  assert_eq!(got.registration_id, stored.registration_id);
  assert_eq!(got.full_name, "Aisha Bello");
  assert_eq!(got.nin_number, "11111111111");
  assert_eq!(got.dob, NaiveDate::from_ymd_opt(1995, 4, 12).unwrap());
  assert_eq!(got.education_level, EducationLevel::Ssce);
  assert_eq!(got.ward, "Galadima");
  assert_eq!(got.created_at, stored.created_at);
}

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;

  let first = s
    .insert(registration("a@example.com", "1", Lga::Anka))
    .await
    .unwrap();
  let second = s
    .insert(registration("b@example.com", "2", Lga::Bakura))
    .await
    .unwrap();
  let third = s
    .insert(registration("c@example.com", "3", Lga::Zurmi))
    .await
    .unwrap();

  let all = s.list_all().await.unwrap();
  let ids: Vec<_> = all.iter().map(|r| r.registration_id).collect();
  assert_eq!(ids, vec![
    third.registration_id,
    second.registration_id,
    first.registration_id,
  ]);
}

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn count_tracks_successful_inserts_only() {
  let s = store().await;

  s.insert(registration("a@example.com", "1", Lga::Gusau))
    .await
    .unwrap();
  s.insert(registration("b@example.com", "2", Lga::Maru))
    .await
    .unwrap();
  assert_eq!(s.count().await.unwrap(), 2);

  // A rejected duplicate leaves the count untouched.
  s.insert(registration("a@example.com", "3", Lga::Anka))
    .await
    .unwrap_err();
  assert_eq!(s.count().await.unwrap(), 2);
  assert_eq!(s.list_all().await.unwrap().len() as u64, s.count().await.unwrap());
}

// ─── Uniqueness ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_email_yields_one_row_and_a_duplicate_signal() {
  let s = store().await;

  s.insert(registration("same@example.com", "1", Lga::Gusau))
    .await
    .unwrap();
  let err = s
    .insert(registration("same@example.com", "2", Lga::Maru))
    .await
    .unwrap_err();

  assert!(err.is_duplicate());
  assert_eq!(CoreError::classify(&err), CoreError::DuplicateRegistration);
  assert_eq!(s.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_nin_yields_one_row_and_a_duplicate_signal() {
  let s = store().await;

  s.insert(registration("a@example.com", "same-nin", Lga::Gusau))
    .await
    .unwrap();
  let err = s
    .insert(registration("b@example.com", "same-nin", Lga::Gusau))
    .await
    .unwrap_err();

  assert!(matches!(err, crate::Error::DuplicateRegistration));
  assert_eq!(s.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn distinct_email_and_nin_both_insert() {
  let s = store().await;
  s.insert(registration("a@example.com", "1", Lga::Gusau))
    .await
    .unwrap();
  s.insert(registration("b@example.com", "2", Lga::Gusau))
    .await
    .unwrap();
  assert_eq!(s.list_all().await.unwrap().len(), 2);
}

// ─── Intake normalisation through the store ──────────────────────────────────

#[tokio::test]
async fn unlisted_ward_free_text_survives_storage() {
  let s = store().await;

  let form = IntakeForm {
    full_name:       "Musa Garba".into(),
    email:           "musa@example.com".into(),
    phone_number:    "08030000001".into(),
    nin_number:      "22222222222".into(),
    dob:             NaiveDate::from_ymd_opt(1988, 7, 1).unwrap(),
    education_level: EducationLevel::Nce,
    lga:             Lga::Tsafe,
    ward:            WardChoice::from_selection(WARD_NOT_LISTED, Some("Keta")),
    benefited_before: false,
    benefit_details: String::new(),
  };

  s.insert(form.into_registration()).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all[0].ward, "Keta");
  assert_ne!(all[0].ward, WARD_NOT_LISTED);
}

#[tokio::test]
async fn benefit_details_stored_empty_when_not_benefited() {
  let s = store().await;

  let mut reg = registration("x@example.com", "9", Lga::Gummi);
  reg.benefited_before = false;
  reg.benefit_details = "stray text".into();
  // Intake normalisation happens before the store; simulate it here.
  let form = IntakeForm {
    full_name:       reg.full_name,
    email:           reg.email,
    phone_number:    reg.phone_number,
    nin_number:      reg.nin_number,
    dob:             reg.dob,
    education_level: reg.education_level,
    lga:             reg.lga,
    ward:            WardChoice::Listed { ward: reg.ward },
    benefited_before: reg.benefited_before,
    benefit_details: reg.benefit_details,
  };
  s.insert(form.into_registration()).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert!(!all[0].benefited_before);
  assert_eq!(all[0].benefit_details, "");
}

#[tokio::test]
async fn benefit_details_roundtrip_when_benefited() {
  let s = store().await;

  let mut reg = registration("y@example.com", "8", Lga::Shinkafi);
  reg.benefited_before = true;
  reg.benefit_details = "2023 fertiliser programme".into();
  s.insert(reg).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert!(all[0].benefited_before);
  assert_eq!(all[0].benefit_details, "2023 fertiliser programme");
}

// ─── Aggregation over stored records ─────────────────────────────────────────

#[tokio::test]
async fn refresh_after_insert_reflects_updated_counts() {
  let s = store().await;

  s.insert(registration("a@example.com", "1", Lga::Anka))
    .await
    .unwrap();
  s.insert(registration("b@example.com", "2", Lga::Anka))
    .await
    .unwrap();
  s.insert(registration("c@example.com", "3", Lga::Bakura))
    .await
    .unwrap();

  let counts = lga_counts(&s.list_all().await.unwrap());
  assert_eq!(counts.len(), 2);
  assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), 3);

  // A fresh insert shows up on the next fetch without any other action.
  s.insert(registration("d@example.com", "4", Lga::Anka))
    .await
    .unwrap();
  let counts = lga_counts(&s.list_all().await.unwrap());
  let anka = counts.iter().find(|c| c.name == Lga::Anka).unwrap();
  assert_eq!(anka.count, 3);
}
