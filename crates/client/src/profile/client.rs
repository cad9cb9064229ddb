//! Profile save client.
//!
//! One POST to the fixed `/edit_profile` endpoint; the outcome is shown
//! to the user through a blocking [`Notifier`], not a structured error
//! channel. When the login changed, the server has already re-keyed the
//! stored cart to the new login - the client just logs that it happened.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Fixed path the profile form saves to.
const EDIT_PROFILE_PATH: &str = "/edit_profile";

/// Errors that can occur while saving the profile.
#[derive(Debug, Error)]
pub enum ProfileSaveError {
    /// The endpoint URL could not be built.
    #[error("invalid profile endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server replied with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// The outbound save payload (field names match the wire format).
///
/// The password stays wrapped in [`SecretString`] until serialization,
/// so it cannot leak through `Debug` output on the way out.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub passport: String,
    pub full_name: String,
    pub card_number: String,
    pub login: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

impl fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileUpdate")
            .field("passport", &self.passport)
            .field("full_name", &self.full_name)
            .field("card_number", &self.card_number)
            .field("login", &self.login)
            .field("password", &"[redacted]")
            .finish()
    }
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

/// The server's reply to a save.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSaveOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub login_changed: Option<bool>,
}

/// Blocking, alert-style notification surface.
pub trait Notifier: Send {
    /// Show `message` and wait for dismissal.
    fn notify(&mut self, message: &str);
}

/// HTTP client for the profile save request.
#[derive(Clone)]
pub struct ProfileClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ProfileClient {
    /// Create a client posting to `{base_url}/edit_profile`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built from `base_url`.
    pub fn new(base_url: &Url) -> Result<Self, ProfileSaveError> {
        let endpoint = base_url.join(EDIT_PROFILE_PATH)?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Send the save request and parse the reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server replies with a
    /// non-success status, or the reply body does not parse.
    pub async fn save(&self, update: &ProfileUpdate) -> Result<ProfileSaveOutcome, ProfileSaveError> {
        let response = self.client.post(self.endpoint.clone()).json(update).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProfileSaveError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Save and surface the outcome through `notifier`, matching the
    /// page's alert texts. Network failures are also surfaced this way -
    /// nothing here is fatal.
    pub async fn save_and_notify(&self, update: &ProfileUpdate, notifier: &mut dyn Notifier) {
        match self.save(update).await {
            Ok(outcome) if outcome.success => {
                notifier.notify("Profile updated successfully");
                if outcome.login_changed.unwrap_or(false) {
                    tracing::info!("cart transferred to new login");
                }
            }
            Ok(outcome) => {
                let message = outcome.message.unwrap_or_default();
                notifier.notify(&format!("Error updating profile: {message}"));
            }
            Err(e) => {
                tracing::error!("profile save failed: {e}");
                notifier.notify(&format!("Error updating profile: {e}"));
            }
        }
    }
}
