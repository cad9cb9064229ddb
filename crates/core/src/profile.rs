//! Validated profile field types.
//!
//! Each field of the profile-edit form has its own parse function; the
//! error messages are exactly the ones shown inline next to the inputs.
//! An empty input is a distinct error: the form shows no message for it
//! but still counts the field as incomplete.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Login prefix reserved for staff accounts.
pub const RESERVED_LOGIN_PREFIX: &str = "of_";

/// Errors that can occur when parsing a [`Passport`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PassportError {
    /// The input string is empty.
    #[error("passport cannot be empty")]
    Empty,
    /// The input contains non-digit characters.
    #[error("Passport must be numbers only")]
    NotNumeric,
    /// The input is not exactly 10 digits.
    #[error("Passport must be exactly 10 digits")]
    WrongLength,
}

/// A passport number: exactly 10 digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Passport(String);

impl Passport {
    /// Required number of digits.
    pub const LENGTH: usize = 10;

    /// Parse a `Passport` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digits, or is
    /// not exactly 10 digits long.
    pub fn parse(s: &str) -> Result<Self, PassportError> {
        if s.is_empty() {
            return Err(PassportError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PassportError::NotNumeric);
        }
        if s.len() != Self::LENGTH {
            return Err(PassportError::WrongLength);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the passport number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when parsing a [`FullName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FullNameError {
    /// The input string is empty.
    #[error("full name cannot be empty")]
    Empty,
    /// The input does not split into exactly three parts.
    #[error("Enter Lastname, Firstname and Patronymic (separated by spaces).")]
    PartsCount,
    /// One of the parts is empty.
    #[error("No empty name parts allowed.")]
    EmptyPart,
    /// One of the parts is all digits.
    #[error("Name parts cannot be numbers.")]
    NumericPart,
}

/// A full name: exactly three whitespace-separated parts, none numeric.
///
/// The three parts are last name, first name, and patronymic, in that
/// order (the order the profile form asks for them).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FullName {
    last: String,
    first: String,
    middle: String,
}

impl FullName {
    /// Parse a `FullName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, does not have exactly three
    /// whitespace-separated parts, or any part is all digits.
    pub fn parse(s: &str) -> Result<Self, FullNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FullNameError::Empty);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [last, first, middle] = parts.as_slice() else {
            return Err(FullNameError::PartsCount);
        };

        for part in [last, first, middle] {
            if part.is_empty() {
                return Err(FullNameError::EmptyPart);
            }
            if part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FullNameError::NumericPart);
            }
        }

        Ok(Self {
            last: (*last).to_owned(),
            first: (*first).to_owned(),
            middle: (*middle).to_owned(),
        })
    }

    /// Last name (first part).
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// First name (second part).
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Patronymic (third part).
    #[must_use]
    pub fn middle(&self) -> &str {
        &self.middle
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.last, self.first, self.middle)
    }
}

/// Errors that can occur when parsing a [`CardNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CardNumberError {
    /// The input string is empty.
    #[error("card number cannot be empty")]
    Empty,
    /// The input contains non-digit characters.
    #[error("Card number must be numbers only")]
    NotNumeric,
    /// The input is not exactly 16 digits.
    #[error("Card number must be exactly 16 digits")]
    WrongLength,
}

/// A bank card number: exactly 16 digits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    /// Required number of digits.
    pub const LENGTH: usize = 16;

    /// Parse a `CardNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digits, or is
    /// not exactly 16 digits long.
    pub fn parse(s: &str) -> Result<Self, CardNumberError> {
        if s.is_empty() {
            return Err(CardNumberError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardNumberError::NotNumeric);
        }
        if s.len() != Self::LENGTH {
            return Err(CardNumberError::WrongLength);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the card number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when parsing a [`Login`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// The input string is empty.
    #[error("login cannot be empty")]
    Empty,
    /// The input starts with the reserved staff prefix.
    #[error("Login cannot start with 'of_'")]
    ReservedPrefix,
    /// The input is shorter than 5 characters.
    #[error("Login must be at least 5 characters")]
    TooShort,
}

/// A user login: at least 5 characters, not starting with the reserved
/// `of_` prefix (case-insensitive).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Login(String);

impl Login {
    /// Minimum login length.
    pub const MIN_LENGTH: usize = 5;

    /// Parse a `Login` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, starts with the reserved
    /// prefix, or is shorter than 5 characters.
    pub fn parse(s: &str) -> Result<Self, LoginError> {
        if s.is_empty() {
            return Err(LoginError::Empty);
        }
        // Prefix check comes first, mirroring the form's message priority.
        // `get` returns None on a non-char-boundary, which cannot match anyway.
        if s.get(..RESERVED_LOGIN_PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(RESERVED_LOGIN_PREFIX))
        {
            return Err(LoginError::ReservedPrefix);
        }
        if s.chars().count() < Self::MIN_LENGTH {
            return Err(LoginError::TooShort);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the login as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when parsing a [`Password`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The input string is empty.
    #[error("password cannot be empty")]
    Empty,
    /// The input is shorter than 6 characters.
    #[error("Password must be at least 6 characters")]
    TooShort,
}

/// A password: at least 6 characters.
///
/// Wrapped in [`SecretString`] so the value never shows up in `Debug`
/// output or logs.
#[derive(Debug, Clone)]
pub struct Password(SecretString);

impl Password {
    /// Minimum password length.
    pub const MIN_LENGTH: usize = 6;

    /// Parse a `Password` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or shorter than 6 characters.
    pub fn parse(s: &str) -> Result<Self, PasswordError> {
        if s.is_empty() {
            return Err(PasswordError::Empty);
        }
        if s.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(SecretString::from(s)))
    }

    /// Expose the password for the outbound save payload.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
