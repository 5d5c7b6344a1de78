//! SQL schema for the Mandate SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Registrations are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS registrations (
    registration_id  TEXT PRIMARY KEY,
    full_name        TEXT NOT NULL,
    email            TEXT NOT NULL UNIQUE,
    phone_number     TEXT NOT NULL,
    nin_number       TEXT NOT NULL UNIQUE,
    dob              TEXT NOT NULL,   -- ISO 8601 calendar date
    education_level  TEXT NOT NULL,   -- closed set, e.g. 'SSCE', 'HND'
    lga              TEXT NOT NULL,   -- one of the 13 Zamfara LGAs
    ward             TEXT NOT NULL,   -- listed ward or free text
    benefited_before INTEGER NOT NULL DEFAULT 0,
    benefit_details  TEXT NOT NULL DEFAULT '',
    created_at       TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS registrations_created_idx ON registrations(created_at);
CREATE INDEX IF NOT EXISTS registrations_lga_idx     ON registrations(lga);

PRAGMA user_version = 1;
";
