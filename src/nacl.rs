// src/nacl.rs

//! One namespace over all four primitive families.

use std::sync::Arc;

use crate::auth::{AuthFacade, HmacSha256Mac, HmacSha512Mac, Verification};
use crate::engine::CryptoEngine;
use crate::error::Result;
use crate::hash::{HashFacade, Sha256Digest, Sha512Digest};
use crate::secretbox::SecretboxFacade;
use crate::stream::StreamFacade;
use crate::Pending;

/// NaCl-style entry point. All four façades share one engine.
///
/// ```
/// # futures::executor::block_on(async {
/// let nacl = naclite::Nacl::software();
/// let digest = nacl.hash_sha256(b"abc").await.unwrap();
/// assert_eq!(digest.len(), naclite::HASH_SHA256_BYTES);
///
/// let key = [7u8; naclite::SECRETBOX_KEYBYTES];
/// let nonce = [1u8; naclite::SECRETBOX_NONCEBYTES];
/// let sealed = nacl.secretbox(&key, &nonce, b"hi").unwrap().await.unwrap();
/// let opened = nacl.secretbox_open(&key, &nonce, &sealed).unwrap().await.unwrap();
/// assert_eq!(opened, b"hi");
/// # });
/// ```
pub struct Nacl<E> {
    hash: HashFacade<E>,
    auth: AuthFacade<E>,
    secretbox: SecretboxFacade<E>,
    stream: StreamFacade<E>,
}

impl<E: CryptoEngine> Nacl<E> {
    pub fn new(engine: E) -> Self {
        Self::with_engine(Arc::new(engine))
    }

    pub fn with_engine(engine: Arc<E>) -> Self {
        Self {
            hash: HashFacade::new(Arc::clone(&engine)),
            auth: AuthFacade::new(Arc::clone(&engine)),
            secretbox: SecretboxFacade::new(Arc::clone(&engine)),
            stream: StreamFacade::new(engine),
        }
    }

    pub fn hashes(&self) -> &HashFacade<E> {
        &self.hash
    }

    pub fn auths(&self) -> &AuthFacade<E> {
        &self.auth
    }

    pub fn secretboxes(&self) -> &SecretboxFacade<E> {
        &self.secretbox
    }

    pub fn streams(&self) -> &StreamFacade<E> {
        &self.stream
    }

    // hash

    pub fn hash<'a>(&'a self, msg: &'a [u8]) -> Pending<'a, Sha512Digest> {
        self.hash.hash(msg)
    }

    pub fn hash_sha256<'a>(&'a self, msg: &'a [u8]) -> Pending<'a, Sha256Digest> {
        self.hash.hash_sha256(msg)
    }

    pub fn hash_sha512<'a>(&'a self, msg: &'a [u8]) -> Pending<'a, Sha512Digest> {
        self.hash.hash_sha512(msg)
    }

    // auth

    pub fn auth<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, HmacSha512Mac>> {
        self.auth.auth(key, msg)
    }

    pub fn auth_verify<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        self.auth.auth_verify(key, msg, mac)
    }

    pub fn auth_hmacsha256<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, HmacSha256Mac>> {
        self.auth.auth_hmacsha256(key, msg)
    }

    pub fn auth_hmacsha256_verify<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        self.auth.auth_hmacsha256_verify(key, msg, mac)
    }

    pub fn auth_hmacsha512<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, HmacSha512Mac>> {
        self.auth.auth_hmacsha512(key, msg)
    }

    pub fn auth_hmacsha512_verify<'a>(
        &'a self,
        key: &'a [u8],
        msg: &'a [u8],
        mac: &'a [u8],
    ) -> Result<Pending<'a, Verification>> {
        self.auth.auth_hmacsha512_verify(key, msg, mac)
    }

    // secretbox

    pub fn secretbox<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.secretbox.secretbox(key, nonce, msg)
    }

    pub fn secretbox_open<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        ciphertext: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.secretbox.secretbox_open(key, nonce, ciphertext)
    }

    pub fn secretbox_aes256gcm<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.secretbox.secretbox_aes256gcm(key, nonce, msg)
    }

    pub fn secretbox_aes256gcm_open<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        ciphertext: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.secretbox.secretbox_aes256gcm_open(key, nonce, ciphertext)
    }

    // stream

    pub fn stream_xor<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream.stream_xor(key, nonce, msg)
    }

    pub fn stream<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        len: usize,
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream.stream(key, nonce, len)
    }

    pub fn stream_aes128ctr_xor<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream.stream_aes128ctr_xor(key, nonce, msg)
    }

    pub fn stream_aes128ctr<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        len: usize,
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream.stream_aes128ctr(key, nonce, len)
    }

    pub fn stream_aes256ctr_xor<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream.stream_aes256ctr_xor(key, nonce, msg)
    }

    pub fn stream_aes256ctr<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        len: usize,
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream.stream_aes256ctr(key, nonce, len)
    }
}

#[cfg(feature = "software")]
impl Nacl<crate::SoftwareEngine> {
    /// Backed by the bundled RustCrypto engine.
    #[must_use]
    pub fn software() -> Self {
        Self::new(crate::SoftwareEngine::new())
    }
}

#[cfg(feature = "software")]
impl Default for Nacl<crate::SoftwareEngine> {
    fn default() -> Self {
        Self::software()
    }
}

impl<E> Clone for Nacl<E> {
    fn clone(&self) -> Self {
        Self {
            hash: self.hash.clone(),
            auth: self.auth.clone(),
            secretbox: self.secretbox.clone(),
            stream: self.stream.clone(),
        }
    }
}
