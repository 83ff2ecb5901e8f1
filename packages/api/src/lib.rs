//! # API crate: backend access for the PlacementPro client
//!
//! Everything the front end knows about the backend lives here: where it is,
//! how requests are sent, what the resources look like, and how a visitor's
//! session is checked, established and ended. The crate has no UI; the `ui`
//! crate drives it from components.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | none | Backend and identity-provider URLs from the build or process environment |
//! | [`client`] | none | [`ApiClient`] with the `/api` prefix and credentials on every request, plus the shared [`client()`] instance |
//! | [`error`] | none | [`ApiError`], the failure type of every call |
//! | [`models`] | none | Wire types: user, profile, drives, applications, tests, resources, announcements, admin stats |
//! | [`auth`] | `testing` for [`auth::MemoryAuth`] | [`auth::AuthBackend`] seam, [`auth::check_auth`], [`auth::end_session`] and the one-time token exchange |
//!
//! ## Endpoints
//!
//! Data endpoints are methods on [`ApiClient`]: `profile`, `update_profile`,
//! `announcements`, `drives`, `apply`, `my_applications`, `tests`,
//! `my_attempts`, `resources`, `admin_stats`. The auth endpoints (`/auth/me`,
//! `/auth/logout`, `/auth/session`) go through [`auth::AuthBackend`].

pub mod auth;
pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod models;

pub use auth::{AuthBackend, AuthOutcome, SessionExchange};
pub use client::{client, ApiClient};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::*;
