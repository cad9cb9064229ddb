//! Dish name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`DishName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum DishNameError {
    /// The input string is empty (or whitespace only).
    #[error("dish name cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("dish name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The name of a dish on the menu.
///
/// Dish names are the unique key of the cart mapping, so they are trimmed
/// on construction to avoid `"Pizza"` and `"Pizza "` becoming two entries.
///
/// ## Constraints
///
/// - Non-empty after trimming
/// - At most 255 characters (storage column limit)
///
/// ## Examples
///
/// ```
/// use bistro_core::DishName;
///
/// assert!(DishName::parse("Pelmeni").is_ok());
/// assert!(DishName::parse("  Borscht  ").is_ok()); // trimmed
/// assert!(DishName::parse("").is_err());
/// assert!(DishName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DishName(String);

impl DishName {
    /// Maximum length of a dish name.
    pub const MAX_LENGTH: usize = 255;

    /// Parse a `DishName` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than 255
    /// characters.
    pub fn parse(s: &str) -> Result<Self, DishNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(DishNameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DishNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the dish name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DishName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DishName {
    type Err = DishNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DishName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
