// src/error.rs

//! Error types for naclite operations.

use thiserror::Error;

/// Errors that can occur during naclite operations.
///
/// The four size variants are raised synchronously, before any engine work
/// is scheduled. They point at a bug in the calling code. The remaining
/// variants come out of the asynchronous pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key does not have the exact width the algorithm requires.
    #[error("Invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    /// The nonce (or IV / initial counter block) has the wrong length.
    #[error("Invalid nonce size: expected {expected} bytes, got {actual}")]
    InvalidNonceSize { expected: usize, actual: usize },

    /// The MAC handed to a verify call has the wrong length.
    #[error("Invalid MAC size: expected {expected} bytes, got {actual}")]
    InvalidMacSize { expected: usize, actual: usize },

    /// The ciphertext is too short to carry an authentication tag.
    #[error("Message too short to include tag: need at least {minimum} bytes, got {actual}")]
    MessageTooShort { minimum: usize, actual: usize },

    /// The authentication tag did not match; no plaintext is released.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The engine refused the raw key bytes at import time.
    #[error("Invalid key material")]
    InvalidKeyMaterial,

    /// The engine failed for a reason outside the façade contract.
    #[error("Crypto engine fault: {0}")]
    EngineFault(String),
}

impl Error {
    /// Shorthand for building an [`Error::EngineFault`].
    pub fn engine(reason: impl Into<String>) -> Self {
        Self::EngineFault(reason.into())
    }

    /// Returns `true` for malformed-argument errors.
    ///
    /// These are raised before any asynchronous work starts and should be
    /// fixed at the call site rather than handled at runtime.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeySize { .. }
                | Self::InvalidNonceSize { .. }
                | Self::InvalidMacSize { .. }
                | Self::MessageTooShort { .. }
        )
    }
}

/// Type alias for results in naclite.
pub type Result<T> = core::result::Result<T, Error>;
