use api::{Profile, ProfileUpdate};
use dioxus::prelude::*;

use crate::guard::LoadingScreen;
use crate::notice::{Notice, NoticeBanner};
use crate::use_auth;
use crate::views::or_not_set;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const SAVE_SUCCESS: &str = "Profile updated successfully!";
pub const SAVE_FAILURE: &str = "Failed to update profile";

/// Editable copy of a profile, kept as the raw text of each input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub phone: String,
    pub college: String,
    pub degree: String,
    pub graduation_year: String,
    pub cgpa: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            phone: profile.phone.clone().unwrap_or_default(),
            college: profile.college.clone().unwrap_or_default(),
            degree: profile.degree.clone().unwrap_or_default(),
            graduation_year: profile.graduation_year.map(|y| y.to_string()).unwrap_or_default(),
            cgpa: profile.cgpa.map(|c| c.to_string()).unwrap_or_default(),
        }
    }

    /// Parse the draft into an update.
    ///
    /// Text fields are always sent so clearing one clears it on the backend.
    /// Blank number fields are left out.
    pub fn to_update(&self) -> Result<ProfileUpdate, String> {
        let graduation_year = match blank_to_none(&self.graduation_year) {
            None => None,
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| "Graduation year must be a whole number".to_string())?,
            ),
        };
        let cgpa = match blank_to_none(&self.cgpa) {
            None => None,
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => return Err("CGPA must be a number".to_string()),
            },
        };
        Ok(ProfileUpdate {
            phone: Some(self.phone.trim().to_string()),
            college: Some(self.college.trim().to_string()),
            degree: Some(self.degree.trim().to_string()),
            graduation_year,
            cgpa,
            skills: None,
        })
    }
}

fn blank_to_none(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(ProfileForm::default);
    let mut invalid = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut envelope = use_resource(|| async {
        api::client().profile().await.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch profile: {e}");
            Default::default()
        })
    });

    let Some(loaded) = envelope.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading profile..." }
        };
    };
    let profile = loaded.profile.unwrap_or_default();
    let user = loaded.user.or_else(|| auth().user);

    let start_edit = {
        let profile = profile.clone();
        move |_| {
            draft.set(ProfileForm::from_profile(&profile));
            invalid.set(None);
            editing.set(true);
        }
    };

    let cancel_edit = {
        let profile = profile.clone();
        move |_| {
            draft.set(ProfileForm::from_profile(&profile));
            invalid.set(None);
            editing.set(false);
        }
    };

    let handle_save = move |_| {
        let update = match draft().to_update() {
            Ok(update) => update,
            Err(message) => {
                invalid.set(Some(message));
                return;
            }
        };
        invalid.set(None);
        spawn(async move {
            saving.set(true);
            match api::client().update_profile(&update).await {
                Ok(_) => {
                    notice.set(Some(Notice::success(SAVE_SUCCESS)));
                    editing.set(false);
                    envelope.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to update profile: {e}");
                    notice.set(Some(Notice::error(SAVE_FAILURE)));
                }
            }
            saving.set(false);
        });
    };

    let form = draft();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            div {
                class: "view-header",
                h1 { class: "view-title", "My Profile" }
                if !editing() {
                    button { class: "btn btn-primary", onclick: start_edit, "Edit Profile" }
                }
            }

            NoticeBanner { notice }

            if let Some(user) = user {
                div {
                    class: "card profile-identity",
                    img { class: "profile-avatar", src: user.avatar_url(80), alt: "{user.name}" }
                    div {
                        h2 { "{user.name}" }
                        p { class: "muted", "{user.email}" }
                    }
                }
            }

            if editing() {
                div {
                    class: "card profile-form",
                    label { "Phone" }
                    input {
                        r#type: "tel",
                        value: "{form.phone}",
                        oninput: move |e| draft.write().phone = e.value(),
                    }
                    label { "College" }
                    input {
                        value: "{form.college}",
                        oninput: move |e| draft.write().college = e.value(),
                    }
                    label { "Degree" }
                    input {
                        value: "{form.degree}",
                        oninput: move |e| draft.write().degree = e.value(),
                    }
                    label { "Graduation year" }
                    input {
                        inputmode: "numeric",
                        value: "{form.graduation_year}",
                        oninput: move |e| draft.write().graduation_year = e.value(),
                    }
                    label { "CGPA" }
                    input {
                        inputmode: "decimal",
                        value: "{form.cgpa}",
                        oninput: move |e| draft.write().cgpa = e.value(),
                    }
                    if let Some(message) = invalid() {
                        p { class: "field-error", "{message}" }
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: handle_save,
                            if saving() { "Saving..." } else { "Save" }
                        }
                        button { class: "btn btn-secondary", onclick: cancel_edit, "Cancel" }
                    }
                }
            } else {
                div {
                    class: "card",
                    dl {
                        dt { "Phone" }
                        dd { {or_not_set(profile.phone)} }
                        dt { "College" }
                        dd { {or_not_set(profile.college)} }
                        dt { "Degree" }
                        dd { {or_not_set(profile.degree)} }
                        dt { "Graduation year" }
                        dd { {or_not_set(profile.graduation_year)} }
                        dt { "CGPA" }
                        dd { {or_not_set(profile.cgpa)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trips_a_stored_profile() {
        let profile = Profile {
            phone: Some("9876543210".into()),
            college: Some("NIT Trichy".into()),
            graduation_year: Some(2025),
            cgpa: Some(8.5),
            ..Default::default()
        };
        let form = ProfileForm::from_profile(&profile);
        assert_eq!(form.graduation_year, "2025");
        assert_eq!(form.cgpa, "8.5");
        assert_eq!(form.degree, "");

        let update = form.to_update().unwrap();
        assert_eq!(update.college.as_deref(), Some("NIT Trichy"));
        assert_eq!(update.graduation_year, Some(2025));
        assert_eq!(update.cgpa, Some(8.5));
        assert_eq!(update.degree.as_deref(), Some(""));
    }

    #[test]
    fn test_cleared_text_fields_are_sent_blank() {
        let mut form = ProfileForm::from_profile(&Profile {
            phone: Some("9876543210".into()),
            college: Some("NIT Trichy".into()),
            ..Default::default()
        });
        form.phone.clear();
        form.college = "  ".into();

        let update = form.to_update().unwrap();
        assert_eq!(update.phone.as_deref(), Some(""));
        assert_eq!(update.college.as_deref(), Some(""));
    }

    #[test]
    fn test_blank_numbers_are_omitted() {
        let form = ProfileForm {
            graduation_year: " ".into(),
            cgpa: "".into(),
            ..Default::default()
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.graduation_year, None);
        assert_eq!(update.cgpa, None);
    }

    #[test]
    fn test_unparsable_numbers_are_rejected() {
        let form = ProfileForm {
            graduation_year: "twenty".into(),
            ..Default::default()
        };
        assert_eq!(form.to_update().unwrap_err(), "Graduation year must be a whole number");

        let form = ProfileForm {
            cgpa: "8,5".into(),
            ..Default::default()
        };
        assert_eq!(form.to_update().unwrap_err(), "CGPA must be a number");
    }
}
