//! Environment-driven server configuration.
//!
//! | Variable                | Default          | Meaning                                   |
//! |-------------------------|------------------|-------------------------------------------|
//! | `WORKBOARD_BIND`        | `127.0.0.1:8000` | Listen address                            |
//! | `DATABASE_URL`          | unset            | `PostgreSQL` URL; unset selects in-memory |
//! | `WORKBOARD_POOL_SIZE`   | `8`              | Maximum pooled connections                |
//! | `WORKBOARD_CREDENTIALS` | unset            | Path to the credentials JSON file         |
//! | `RUST_LOG`              | unset            | Log filter directive (`EnvFilter` syntax) |

use crate::identity::adapters::Credential;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND: &str = "127.0.0.1:8000";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The listen address could not be parsed.
    #[error("invalid WORKBOARD_BIND '{value}': {source}")]
    InvalidBindAddress {
        /// Rejected value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },

    /// The pool size is not a positive integer.
    #[error("invalid WORKBOARD_POOL_SIZE '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// The credentials file could not be read.
    #[error("failed to read credentials file {path}: {source}")]
    CredentialsRead {
        /// File that was requested.
        path: Utf8PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON of the expected shape.
    #[error("failed to parse credentials file {path}: {source}")]
    CredentialsParse {
        /// File that was parsed.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    bind_address: SocketAddr,
    database_url: Option<String>,
    pool_size: u32,
    credentials_path: Option<Utf8PathBuf>,
    log_filter: Option<String>,
}

impl ServerConfig {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let bind_value = get("WORKBOARD_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind_address = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: bind_value.clone(),
                source,
            })?;

        let pool_size = match get("WORKBOARD_POOL_SIZE") {
            None => DEFAULT_POOL_SIZE,
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolSize(value))?,
        };

        Ok(Self {
            bind_address,
            database_url: get("DATABASE_URL"),
            pool_size,
            credentials_path: get("WORKBOARD_CREDENTIALS").map(Utf8PathBuf::from),
            log_filter: get("RUST_LOG"),
        })
    }

    /// Returns the listen address.
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Returns the `PostgreSQL` URL, if configured.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns the credentials file path, if configured.
    #[must_use]
    pub fn credentials_path(&self) -> Option<&Utf8Path> {
        self.credentials_path.as_deref()
    }

    /// Returns the `RUST_LOG` filter directive, if set.
    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }
}

/// Reads the credentials file: a JSON array of `{token, user}` entries.
///
/// # Errors
///
/// Returns [`ConfigError::CredentialsRead`] when the file cannot be opened
/// or [`ConfigError::CredentialsParse`] when its content is malformed.
pub fn load_credentials(path: &Utf8Path) -> Result<Vec<Credential>, ConfigError> {
    let read_error = |source| ConfigError::CredentialsRead {
        path: path.to_owned(),
        source,
    };
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "credentials path has no file name",
        ))
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::CredentialsParse {
        path: path.to_owned(),
        source,
    })
}
