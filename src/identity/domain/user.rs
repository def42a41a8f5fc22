//! User record mirrored from the identity provider.

use super::UserId;
use serde::{Deserialize, Serialize};

/// A user as exposed to API callers: `{id, username, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address; may be empty.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
