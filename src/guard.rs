// src/guard.rs

//! Synchronous size checks run before any engine work is scheduled.

use crate::error::{Error, Result};

pub(crate) fn key_size(op: &'static str, key: &[u8], expected: usize) -> Result<()> {
    if key.len() != expected {
        tracing::debug!(op, expected, actual = key.len(), "rejected key size");
        return Err(Error::InvalidKeySize {
            expected,
            actual: key.len(),
        });
    }
    Ok(())
}

pub(crate) fn nonce_size(op: &'static str, nonce: &[u8], expected: usize) -> Result<()> {
    if nonce.len() != expected {
        tracing::debug!(op, expected, actual = nonce.len(), "rejected nonce size");
        return Err(Error::InvalidNonceSize {
            expected,
            actual: nonce.len(),
        });
    }
    Ok(())
}

pub(crate) fn mac_size(op: &'static str, mac: &[u8], expected: usize) -> Result<()> {
    if mac.len() != expected {
        tracing::debug!(op, expected, actual = mac.len(), "rejected MAC size");
        return Err(Error::InvalidMacSize {
            expected,
            actual: mac.len(),
        });
    }
    Ok(())
}

pub(crate) fn min_len(op: &'static str, ciphertext: &[u8], minimum: usize) -> Result<()> {
    if ciphertext.len() < minimum {
        tracing::debug!(op, minimum, actual = ciphertext.len(), "rejected short ciphertext");
        return Err(Error::MessageTooShort {
            minimum,
            actual: ciphertext.len(),
        });
    }
    Ok(())
}

/// Convert an engine output into a fixed-width array.
pub(crate) fn fixed<const N: usize>(bytes: Vec<u8>) -> Result<[u8; N]> {
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| Error::engine(format!("engine returned {len} bytes, expected {N}")))
}
