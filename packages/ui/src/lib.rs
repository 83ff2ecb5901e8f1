//! This crate contains all shared UI for the workspace.
//!
//! | Module | Contents |
//! |---|---|
//! | `auth` | [`AuthState`], [`AuthProvider`], logout |
//! | [`guard`] | route guard decisions and the loading screen |
//! | [`session`] | identity-provider token hand-off |
//! | [`views`] | the dashboard shell and every page |

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const APP_CSS: Asset = asset!("/assets/styling/app.css");

mod auth;
pub use auth::{
    logout, refresh_auth, sign_out_with, use_auth, AuthProvider, AuthState, AuthStore,
    LogoutButton,
};

pub mod browser;

pub mod guard;
pub use guard::{require_admin, require_user, Access, Landing, LoadingScreen};

pub mod session;
pub use session::SessionHandler;

mod notice;
pub use notice::{Notice, NoticeBanner, NoticeKind};

pub mod views;
