//! Profile editing: form state, validation, and the save request.

mod client;
mod form;

pub use client::{Notifier, ProfileClient, ProfileSaveError, ProfileSaveOutcome, ProfileUpdate};
pub use form::{FieldState, ProfileField, ProfileForm};
