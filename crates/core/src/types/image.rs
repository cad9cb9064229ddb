//! Dish image URL type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A dish image URL.
///
/// Menu cards may omit an image or fail to load one; those cases fall back
/// to a well-known placeholder so the cart always renders something.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Placeholder shown when a dish has no usable image.
    pub const PLACEHOLDER: &'static str = "https://via.placeholder.com/250x180?text=Image+Error";

    /// Create an `ImageUrl`, substituting the placeholder for blank input.
    #[must_use]
    pub fn new(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Self::placeholder()
        } else {
            Self(trimmed.to_owned())
        }
    }

    /// The placeholder image.
    #[must_use]
    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_owned())
    }

    /// Whether this is the placeholder rather than a real image.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageUrl {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
