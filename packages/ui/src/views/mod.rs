//! Shared page views. Platform packages wrap them in routes and pass
//! navigation callbacks.

use std::fmt::Display;

mod dashboard_layout;
pub use dashboard_layout::{nav_items, DashboardLayoutView, NavItem};

mod landing;
pub use landing::{provider_login_url, LandingView};

mod dashboard;
pub use dashboard::{profile_summary, DashboardView};

mod drives;
pub use drives::{apply_notice, filter_drives, DrivesView};

mod applications;
pub use applications::ApplicationsView;

mod mock_tests;
pub use mock_tests::MockTestsView;

mod resources;
pub use resources::ResourcesView;

mod profile;
pub use profile::{ProfileForm, ProfileView};

mod admin;
pub use admin::AdminView;

mod not_found;
pub use not_found::NotFoundView;

/// Display text for an optional profile field. Blank text counts as unset.
pub(crate) fn or_not_set<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "Not set".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_not_set() {
        assert_eq!(or_not_set(Some(8.5)), "8.5");
        assert_eq!(or_not_set(Some("IIT Bombay")), "IIT Bombay");
        assert_eq!(or_not_set(None::<String>), "Not set");
        assert_eq!(or_not_set(Some("")), "Not set");
    }
}
