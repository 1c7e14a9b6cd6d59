// src/auth.rs

//! HMAC-SHA256 and HMAC-SHA512 message authentication.
//!
//! Every call runs validate → import → sign/verify. Validation is the only
//! synchronous stage: a wrong key or MAC width comes back as `Err` from the
//! call itself, before any future exists. Once a future is returned, a MAC
//! mismatch resolves to [`Verification::Invalid`], never to an error, so
//! "could not verify" and "verified, did not match" cannot be confused.

use std::sync::Arc;

use futures::FutureExt;

use crate::consts::{
    AUTH_HMACSHA256_BYTES, AUTH_HMACSHA256_KEYBYTES, AUTH_HMACSHA512_BYTES,
    AUTH_HMACSHA512_KEYBYTES,
};
use crate::engine::{Algorithm, CryptoEngine, HashAlgorithm, KeyUsage};
use crate::error::{Error, Result};
use crate::{guard, Pending};

pub type HmacSha256Mac = [u8; AUTH_HMACSHA256_BYTES];
pub type HmacSha512Mac = [u8; AUTH_HMACSHA512_BYTES];

/// Outcome of a MAC check that actually ran.
#[must_use = "a verification outcome must be checked"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verification {
    Valid,
    Invalid,
}

impl Verification {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }

    /// Turn an `Invalid` outcome into [`Error::AuthenticationFailed`].
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid => Err(Error::AuthenticationFailed),
        }
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

#[derive(Clone, Copy)]
struct Hmac {
    name: &'static str,
    hash: HashAlgorithm,
    key_bytes: usize,
}

const HMAC_SHA256: Hmac = Hmac {
    name: "auth_hmacsha256",
    hash: HashAlgorithm::Sha256,
    key_bytes: AUTH_HMACSHA256_KEYBYTES,
};

const HMAC_SHA512: Hmac = Hmac {
    name: "auth_hmacsha512",
    hash: HashAlgorithm::Sha512,
    key_bytes: AUTH_HMACSHA512_KEYBYTES,
};

pub struct AuthFacade<E> {
    engine: Arc<E>,
}

impl<E: CryptoEngine> AuthFacade<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Generic auth; HMAC-SHA512 with a 64-byte key.
    pub fn auth<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, HmacSha512Mac>> {
        self.auth_hmacsha512(key, msg)
    }

    /// Generic verify; HMAC-SHA512 with a 64-byte key and 64-byte MAC.
    pub fn auth_verify<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        self.auth_hmacsha512_verify(key, msg, mac)
    }

    pub fn auth_hmacsha256<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, HmacSha256Mac>> {
        self.sign(HMAC_SHA256, key, msg)
    }

    pub fn auth_hmacsha256_verify<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        self.verify::<AUTH_HMACSHA256_BYTES>(HMAC_SHA256, key, msg, mac)
    }

    pub fn auth_hmacsha512<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, HmacSha512Mac>> {
        self.sign(HMAC_SHA512, key, msg)
    }

    pub fn auth_hmacsha512_verify<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        self.verify::<AUTH_HMACSHA512_BYTES>(HMAC_SHA512, key, msg, mac)
    }

    fn sign<'a, const N: usize>(
        &'a self,
        hmac: Hmac,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, [u8; N]>> {
        guard::key_size(hmac.name, key, hmac.key_bytes)?;

        let engine = &self.engine;
        Ok(async move {
            let handle = engine
                .import_key(key, Algorithm::Hmac(hmac.hash), KeyUsage::Sign)
                .await?;
            tracing::trace!(op = hmac.name, len = msg.len(), "signing");
            let mac = engine.hmac_sign(&handle, msg).await?;
            guard::fixed(mac)
        }
        .boxed())
    }

    fn verify<'a, const N: usize>(
        &'a self,
        hmac: Hmac,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        let op = hmac.name;
        guard::key_size(op, key, hmac.key_bytes)?;
        guard::mac_size(op, mac, N)?;

        let engine = &self.engine;
        Ok(async move {
            // Import failures surface as errors here, before any comparison.
            let handle = engine
                .import_key(key, Algorithm::Hmac(hmac.hash), KeyUsage::Verify)
                .await?;
            let outcome = Verification::from(engine.hmac_verify(&handle, msg, mac).await?);
            tracing::trace!(op, ?outcome, "verified");
            Ok(outcome)
        }
        .boxed())
    }
}

impl<E> Clone for AuthFacade<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_from_bool() {
        assert_eq!(Verification::from(true), Verification::Valid);
        assert_eq!(Verification::from(false), Verification::Invalid);
    }

    #[test]
    fn test_invalid_into_result_is_authentication_failure() {
        assert_eq!(Verification::Valid.into_result(), Ok(()));
        assert_eq!(
            Verification::Invalid.into_result(),
            Err(Error::AuthenticationFailed)
        );
    }
}
