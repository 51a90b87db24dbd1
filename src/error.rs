//! Error types for Pulso.
//!
//! All errors implement `std::error::Error` and provide human-readable
//! messages. The policy core never treats any of these as fatal: a failed
//! sysfs write means "the requested power behavior did not take effect",
//! and the caller proceeds.

use thiserror::Error;

/// Primary error type for Pulso operations.
///
/// Variants are `Clone + Eq` so they can be captured and compared in tests
/// without holding on to a live `io::Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An open, read, or write on a sysfs pseudo-file failed.
    ///
    /// This is routine when a tunable is absent (governor not loaded,
    /// kernel built without the interactive governor) or when the process
    /// lacks write permission. Callers log it and continue.
    #[error("sysfs access failed on {path}: {message}")]
    Sysfs {
        /// The sysfs path that was being accessed.
        path: String,
        /// Human-readable description of the underlying I/O failure.
        message: String,
    },

    /// A requested profile index lies outside the catalog range.
    #[error("invalid power profile {index} (catalog holds {count} profiles)")]
    InvalidProfile {
        /// The rejected index.
        index: i32,
        /// Number of profiles in the catalog.
        count: usize,
    },

    /// A sysfs value could not be parsed as the expected integer.
    #[error("unparseable value {value:?} read from {path}")]
    Parse {
        /// The sysfs path the value came from.
        path: String,
        /// The raw text that failed to parse.
        value: String,
    },
}

/// Result type alias for Pulso operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new `Sysfs` error from a path and an I/O error.
    pub fn sysfs(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Sysfs {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a new `InvalidProfile` error.
    #[must_use]
    pub const fn invalid_profile(index: i32, count: usize) -> Self {
        Self::InvalidProfile { index, count }
    }

    /// Create a new `Parse` error.
    pub fn parse(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Check if this error came from a sysfs access.
    #[must_use]
    pub const fn is_sysfs(&self) -> bool {
        matches!(self, Self::Sysfs { .. })
    }

    /// Check if this error rejected a profile index.
    #[must_use]
    pub const fn is_invalid_profile(&self) -> bool {
        matches!(self, Self::InvalidProfile { .. })
    }

    /// Get the sysfs path involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Sysfs { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::InvalidProfile { .. } => None,
        }
    }
}
