// src/hash.rs

//! SHA-256 / SHA-512 digests.

use std::sync::Arc;

use futures::FutureExt;

use crate::consts::{HASH_SHA256_BYTES, HASH_SHA512_BYTES};
use crate::engine::{CryptoEngine, HashAlgorithm};
use crate::{guard, Pending};

pub type Sha256Digest = [u8; HASH_SHA256_BYTES];
pub type Sha512Digest = [u8; HASH_SHA512_BYTES];

/// Hashing has no preconditions, so these calls return the pending result
/// directly instead of a validation `Result`.
pub struct HashFacade<E> {
    engine: Arc<E>,
}

impl<E: CryptoEngine> HashFacade<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Generic hash; SHA-512.
    pub fn hash<'a>(&'a self, msg: &'a [u8]) -> Pending<'a, Sha512Digest> {
        self.hash_sha512(msg)
    }

    pub fn hash_sha256<'a>(&'a self, msg: &'a [u8]) -> Pending<'a, Sha256Digest> {
        self.digest(HashAlgorithm::Sha256, msg)
    }

    pub fn hash_sha512<'a>(&'a self, msg: &'a [u8]) -> Pending<'a, Sha512Digest> {
        self.digest(HashAlgorithm::Sha512, msg)
    }

    fn digest<'a, const N: usize>(
        &'a self,
        algorithm: HashAlgorithm,
        msg: &'a [u8],
    ) -> Pending<'a, [u8; N]> {
        async move {
            tracing::trace!(?algorithm, len = msg.len(), "digest");
            let out = self.engine.digest(algorithm, msg).await?;
            guard::fixed(out)
        }
        .boxed()
    }
}

impl<E> Clone for HashFacade<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
