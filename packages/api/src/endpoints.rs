//! Typed wrappers for the data endpoints the pages read and write.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AdminStats, Announcement, Application, Drive, MockTest, Profile, ProfileEnvelope,
    ProfileUpdate, Resource, TestAttempt,
};
use url::form_urlencoded;

impl ApiClient {
    /// `GET /profile`
    pub async fn profile(&self) -> Result<ProfileEnvelope, ApiError> {
        self.get("/profile").await
    }

    /// `PUT /profile`, returning the stored profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<Profile>, ApiError> {
        self.put("/profile", update).await
    }

    /// `GET /announcements`
    pub async fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get("/announcements").await
    }

    /// `GET /drives`
    pub async fn drives(&self) -> Result<Vec<Drive>, ApiError> {
        self.get("/drives").await
    }

    /// `POST /applications?drive_id=<id>`
    pub async fn apply(&self, drive_id: &str) -> Result<(), ApiError> {
        self.post_empty(&apply_path(drive_id)).await
    }

    /// `GET /applications/my`
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get("/applications/my").await
    }

    /// `GET /tests`
    pub async fn tests(&self) -> Result<Vec<MockTest>, ApiError> {
        self.get("/tests").await
    }

    /// `GET /tests/attempts/my`
    pub async fn my_attempts(&self) -> Result<Vec<TestAttempt>, ApiError> {
        self.get("/tests/attempts/my").await
    }

    /// `GET /resources`
    pub async fn resources(&self) -> Result<Vec<Resource>, ApiError> {
        self.get("/resources").await
    }

    /// `GET /admin/stats`
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get("/admin/stats").await
    }
}

fn apply_path(drive_id: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("drive_id", drive_id)
        .finish();
    format!("/applications?{query}")
}
