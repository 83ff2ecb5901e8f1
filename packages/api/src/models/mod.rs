//! # Wire models
//!
//! Mirrors of the backend's JSON resources. None of them are owned by the
//! client: each is a transient fetch result that lives as long as the page
//! showing it.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`UserInfo`], [`Role`] |
//! | [`profile`] | [`Profile`], [`ProfileEnvelope`], [`ProfileUpdate`] |
//! | [`drive`] | [`Drive`] |
//! | [`application`] | [`Application`], [`ApplicationStatus`] |
//! | [`assessment`] | [`MockTest`], [`TestAttempt`] |
//! | [`content`] | [`Resource`], [`Announcement`] |
//! | [`stats`] | [`AdminStats`], [`StatusCount`] |
//!
//! Timestamps stay ISO-8601 strings on the wire; [`display_date`] formats them
//! for the views.

pub mod application;
pub mod assessment;
pub mod content;
pub mod drive;
pub mod profile;
pub mod stats;
pub mod user;

pub use application::{Application, ApplicationStatus};
pub use assessment::{MockTest, TestAttempt};
pub use content::{Announcement, Resource};
pub use drive::Drive;
pub use profile::{Profile, ProfileEnvelope, ProfileUpdate};
pub use stats::{AdminStats, StatusCount};
pub use user::{Role, UserInfo};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an ISO-8601 timestamp as e.g. `05 Mar 2025`.
///
/// Accepts RFC 3339, naive date-times and plain dates; anything else is
/// returned unchanged.
pub fn display_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
