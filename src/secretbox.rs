// src/secretbox.rs

//! Authenticated encryption with AES-256-GCM.
//!
//! `secretbox` returns `ciphertext || tag` with a fixed 128-bit tag.
//! `secretbox_open` either returns the full plaintext or fails with
//! [`crate::Error::AuthenticationFailed`]; unauthenticated plaintext is never
//! released.

use std::sync::Arc;

use futures::FutureExt;

use crate::consts::{
    SECRETBOX_AES256GCM_KEYBYTES, SECRETBOX_AES256GCM_MACBYTES, SECRETBOX_AES256GCM_NONCEBYTES,
    SECRETBOX_TAG_BITS,
};
use crate::engine::{Algorithm, CryptoEngine, KeyUsage};
use crate::error::Result;
use crate::{guard, Pending};

pub struct SecretboxFacade<E> {
    engine: Arc<E>,
}

impl<E: CryptoEngine> SecretboxFacade<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    pub fn secretbox<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.secretbox_aes256gcm(key, nonce, msg)
    }

    pub fn secretbox_open<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        ciphertext: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.secretbox_aes256gcm_open(key, nonce, ciphertext)
    }

    /// Encrypt `msg` under a 32-byte key and 16-byte nonce.
    pub fn secretbox_aes256gcm<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        const OP: &str = "secretbox_aes256gcm";
        guard::key_size(OP, key, SECRETBOX_AES256GCM_KEYBYTES)?;
        guard::nonce_size(OP, nonce, SECRETBOX_AES256GCM_NONCEBYTES)?;

        let engine = &self.engine;
        Ok(async move {
            let handle = engine
                .import_key(key, Algorithm::AesGcm, KeyUsage::Encrypt)
                .await?;
            tracing::trace!(op = OP, len = msg.len(), "sealing");
            engine
                .aead_encrypt(&handle, nonce, SECRETBOX_TAG_BITS, msg)
                .await
        }
        .boxed())
    }

    /// Authenticate and decrypt `ciphertext || tag`.
    ///
    /// Anything shorter than the tag is rejected before the engine is touched.
    pub fn secretbox_aes256gcm_open<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        ciphertext: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        const OP: &str = "secretbox_aes256gcm_open";
        guard::key_size(OP, key, SECRETBOX_AES256GCM_KEYBYTES)?;
        guard::nonce_size(OP, nonce, SECRETBOX_AES256GCM_NONCEBYTES)?;
        guard::min_len(OP, ciphertext, SECRETBOX_AES256GCM_MACBYTES)?;

        let engine = &self.engine;
        Ok(async move {
            let handle = engine
                .import_key(key, Algorithm::AesGcm, KeyUsage::Decrypt)
                .await?;
            tracing::trace!(op = OP, len = ciphertext.len(), "opening");
            engine
                .aead_decrypt(&handle, nonce, SECRETBOX_TAG_BITS, ciphertext)
                .await
                .inspect_err(|err| tracing::debug!(op = OP, %err, "open failed"))
        }
        .boxed())
    }
}

impl<E> Clone for SecretboxFacade<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
