//! Profile-edit form state.
//!
//! Five independent fields, each re-validated on every edit. An empty
//! field shows no inline error but still blocks the save button: overall
//! validity is "every field non-empty AND every field valid".

use core::fmt;

use bistro_core::profile::{
    CardNumber, CardNumberError, FullName, FullNameError, Login, LoginError, Passport,
    PassportError, Password, PasswordError,
};
use secrecy::SecretString;

use super::client::ProfileUpdate;

/// The five fields of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Passport,
    FullName,
    CardNumber,
    Login,
    Password,
}

impl ProfileField {
    /// All fields, in form order.
    pub const ALL: [Self; 5] = [
        Self::Passport,
        Self::FullName,
        Self::CardNumber,
        Self::Login,
        Self::Password,
    ];
}

/// One field's current value, inline error, and character counter.
#[derive(Clone, Default)]
pub struct FieldState {
    value: String,
    error: Option<String>,
    /// Counter limit, for the fields that display `N / max`.
    max: Option<usize>,
    /// Sensitive values are redacted in `Debug` output.
    sensitive: bool,
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = if self.sensitive { &"[redacted]" } else { &self.value };
        f.debug_struct("FieldState")
            .field("value", value)
            .field("error", &self.error)
            .field("max", &self.max)
            .finish()
    }
}

impl FieldState {
    fn new(max: Option<usize>) -> Self {
        Self {
            value: String::new(),
            error: None,
            max,
            sensitive: false,
        }
    }

    fn sensitive() -> Self {
        Self {
            sensitive: true,
            ..Self::new(None)
        }
    }

    /// The raw input value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Inline error message, if the (non-empty) value is invalid.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Character counter text (e.g. `"3 / 10"`) for counted fields.
    #[must_use]
    pub fn counter(&self) -> Option<String> {
        self.max
            .map(|max| format!("{} / {max}", self.value.chars().count()))
    }

    /// Non-empty and passing its validator.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.value.is_empty() && self.error.is_none()
    }
}

/// State of the whole profile-edit form.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    passport: FieldState,
    full_name: FieldState,
    card_number: FieldState,
    login: FieldState,
    password: FieldState,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    /// An empty form. Counter limits match the rendered inputs
    /// (passport 10, card 16, login 50).
    #[must_use]
    pub fn new() -> Self {
        Self {
            passport: FieldState::new(Some(Passport::LENGTH)),
            full_name: FieldState::new(None),
            card_number: FieldState::new(Some(CardNumber::LENGTH)),
            login: FieldState::new(Some(50)),
            password: FieldState::sensitive(),
        }
    }

    /// A form pre-filled with the user's current data, validated
    /// immediately (the page validates on load).
    #[must_use]
    pub fn prefilled(
        passport: &str,
        full_name: &str,
        card_number: &str,
        login: &str,
        password: &str,
    ) -> Self {
        let mut form = Self::new();
        form.set_field(ProfileField::Passport, passport);
        form.set_field(ProfileField::FullName, full_name);
        form.set_field(ProfileField::CardNumber, card_number);
        form.set_field(ProfileField::Login, login);
        form.set_field(ProfileField::Password, password);
        form
    }

    /// Update one field's value and re-validate it.
    pub fn set_field(&mut self, field: ProfileField, value: &str) {
        let error = validate(field, value);
        let state = self.field_mut(field);
        state.value = value.to_owned();
        state.error = error;
    }

    /// One field's current state.
    #[must_use]
    pub fn field(&self, field: ProfileField) -> &FieldState {
        match field {
            ProfileField::Passport => &self.passport,
            ProfileField::FullName => &self.full_name,
            ProfileField::CardNumber => &self.card_number,
            ProfileField::Login => &self.login,
            ProfileField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut FieldState {
        match field {
            ProfileField::Passport => &mut self.passport,
            ProfileField::FullName => &mut self.full_name,
            ProfileField::CardNumber => &mut self.card_number,
            ProfileField::Login => &mut self.login,
            ProfileField::Password => &mut self.password,
        }
    }

    /// Whether the save button is enabled: all fields non-empty and valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        ProfileField::ALL
            .iter()
            .all(|field| self.field(*field).is_complete())
    }

    /// The outbound save payload, available only while the form is valid.
    #[must_use]
    pub fn payload(&self) -> Option<ProfileUpdate> {
        if !self.is_valid() {
            return None;
        }
        Some(ProfileUpdate {
            passport: self.passport.value.clone(),
            full_name: self.full_name.value.clone(),
            card_number: self.card_number.value.clone(),
            login: self.login.value.clone(),
            password: SecretString::from(self.password.value.clone()),
        })
    }
}

/// Validate one field. Empty input yields no inline message (the field is
/// still incomplete); any other failure yields the exact message shown
/// next to the input.
fn validate(field: ProfileField, value: &str) -> Option<String> {
    match field {
        ProfileField::Passport => match Passport::parse(value) {
            Ok(_) | Err(PassportError::Empty) => None,
            Err(e) => Some(e.to_string()),
        },
        ProfileField::FullName => match FullName::parse(value) {
            Ok(_) | Err(FullNameError::Empty) => None,
            Err(e) => Some(e.to_string()),
        },
        ProfileField::CardNumber => match CardNumber::parse(value) {
            Ok(_) | Err(CardNumberError::Empty) => None,
            Err(e) => Some(e.to_string()),
        },
        ProfileField::Login => match Login::parse(value) {
            Ok(_) | Err(LoginError::Empty) => None,
            Err(e) => Some(e.to_string()),
        },
        ProfileField::Password => match Password::parse(value) {
            Ok(_) | Err(PasswordError::Empty) => None,
            Err(e) => Some(e.to_string()),
        },
    }
}
