//! Validated text inputs shared by boards and tasks.
//!
//! Titles and descriptions have the same rules on both entities, and the
//! status and assignment endpoints report their own missing-input
//! failures through the same [`ValidationError`] type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length for a title, matching the `VARCHAR(200)` columns.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Errors returned while validating caller-supplied input.
///
/// The `Display` text of the status and assignment variants is the exact
/// message returned to HTTP callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is empty after trimming.
    #[error("This field may not be blank.")]
    EmptyTitle,

    /// The title exceeds [`MAX_TITLE_LENGTH`] characters.
    #[error("Ensure this field has no more than 200 characters (it has {length}).")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
    },

    /// No status value was supplied.
    #[error("Status is required")]
    MissingStatus,

    /// The supplied status is not one of the enumerated values.
    #[error("Invalid status")]
    InvalidStatus(String),

    /// No user identifier was supplied for assignment.
    #[error("User ID is required")]
    MissingUserId,
}

impl ValidationError {
    /// Returns the request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::MissingStatus | Self::InvalidStatus(_) => "status",
            Self::MissingUserId => "user_id",
        }
    }
}

/// Non-empty title of at most [`MAX_TITLE_LENGTH`] characters.
///
/// Deserialization runs the same checks as [`Title::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Title(String);

impl Title {
    /// Creates a validated title.
    ///
    /// The input is trimmed before validation; the length limit counts
    /// characters rather than bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the value is empty after
    /// trimming or [`ValidationError::TitleTooLong`] when it exceeds 200
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let length = normalized.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong { length });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form description; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Wraps a description verbatim.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated partial update of an entity's title and description.
///
/// Absent fields are left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsUpdate {
    title: Option<Title>,
    description: Option<Description>,
}

impl DetailsUpdate {
    /// Validates raw optional title and description values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a supplied title is invalid.
    pub fn parse(
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.map(Title::new).transpose()?,
            description: description.map(Description::new),
        })
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns `true` when the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
