// src/engine.rs

//! The primitive engine capability the façades are built on.
//!
//! An engine owns the actual SHA-2, HMAC, AES-GCM and AES-CTR transforms.
//! The façades only validate sizes, import a key for one usage and hand the
//! work over. Implement [`CryptoEngine`] to plug in a platform provider or a
//! test double; [`crate::SoftwareEngine`] is the bundled default.

use async_trait::async_trait;

use crate::error::Result;

/// Digest algorithms the façades ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Digest width in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

/// Algorithm a key handle is imported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Hmac(HashAlgorithm),
    AesGcm,
    AesCtr,
}

/// The single operation a key handle may be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyUsage {
    Sign,
    Verify,
    Encrypt,
    Decrypt,
}

/// Narrow capability interface over a cryptographic engine.
///
/// Every method may suspend. Implementations must not expose raw key bytes
/// back out of a [`CryptoEngine::KeyHandle`].
#[async_trait]
pub trait CryptoEngine: Send + Sync {
    /// Opaque, non-extractable key imported for one algorithm and one usage.
    type KeyHandle: Send + Sync;

    /// Materialize a key handle from raw bytes.
    ///
    /// Fails with [`crate::Error::InvalidKeyMaterial`] if the engine itself
    /// rejects the bytes.
    async fn import_key(
        &self,
        raw: &[u8],
        algorithm: Algorithm,
        usage: KeyUsage,
    ) -> Result<Self::KeyHandle>;

    async fn digest(&self, algorithm: HashAlgorithm, msg: &[u8]) -> Result<Vec<u8>>;

    async fn hmac_sign(&self, key: &Self::KeyHandle, msg: &[u8]) -> Result<Vec<u8>>;

    /// Recompute the MAC over `msg` and compare it with `mac`.
    ///
    /// A mismatch is `Ok(false)`, not an error.
    async fn hmac_verify(&self, key: &Self::KeyHandle, msg: &[u8], mac: &[u8]) -> Result<bool>;

    /// Encrypt and append a `tag_bits`-bit tag to the ciphertext.
    async fn aead_encrypt(
        &self,
        key: &Self::KeyHandle,
        nonce: &[u8],
        tag_bits: usize,
        msg: &[u8],
    ) -> Result<Vec<u8>>;

    /// Authenticate and decrypt.
    ///
    /// Fails with [`crate::Error::AuthenticationFailed`] on tag mismatch and
    /// must not return any plaintext in that case.
    async fn aead_decrypt(
        &self,
        key: &Self::KeyHandle,
        nonce: &[u8],
        tag_bits: usize,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>>;

    /// XOR `msg` with the keystream starting at `counter_block`, where the
    /// trailing `counter_bits` bits are the big-endian block counter.
    async fn ctr_encrypt(
        &self,
        key: &Self::KeyHandle,
        counter_block: &[u8],
        counter_bits: usize,
        msg: &[u8],
    ) -> Result<Vec<u8>>;
}
