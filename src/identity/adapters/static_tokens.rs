//! Identity provider backed by a fixed token table.
//!
//! The table is loaded from the credentials file named in the server
//! configuration. Each entry binds a bearer token to a user; the same users
//! are seeded into the [`UserDirectory`](crate::identity::ports::UserDirectory)
//! at startup so they can be assigned to tasks.

use crate::identity::{
    domain::{User, UserId},
    ports::{IdentityProvider, IdentityResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the credentials file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token presented by the caller.
    pub token: String,
    /// User the token authenticates as.
    pub user: User,
}

/// Token-to-user lookup table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenIdentityProvider {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenIdentityProvider {
    /// Builds the lookup table from credentials.
    ///
    /// Blank tokens are ignored; a repeated token keeps its last binding.
    #[must_use]
    pub fn new<'a>(credentials: impl IntoIterator<Item = &'a Credential>) -> Self {
        let tokens = credentials
            .into_iter()
            .filter(|credential| !credential.token.trim().is_empty())
            .map(|credential| (credential.token.trim().to_owned(), credential.user.id()))
            .collect();
        Self { tokens }
    }

    /// Returns the number of recognised tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no token is recognised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenIdentityProvider {
    async fn authenticate(&self, token: &str) -> IdentityResult<Option<UserId>> {
        Ok(self.tokens.get(token.trim()).copied())
    }
}
