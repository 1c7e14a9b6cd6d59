// src/stream.rs

//! AES-CTR stream cipher with 128- and 256-bit keys.
//!
//! The 16-byte nonce is the initial counter block. Its last 4 bytes are a
//! big-endian block counter that wraps without carrying into the prefix.
//! Running a keystream past 2^32 blocks from one nonce is not supported.

use std::sync::Arc;

use futures::FutureExt;

use crate::consts::{
    STREAM_AES128CTR_KEYBYTES, STREAM_AES128CTR_NONCEBYTES, STREAM_AES256CTR_KEYBYTES,
    STREAM_AES256CTR_NONCEBYTES, STREAM_COUNTER_BITS,
};
use crate::engine::{Algorithm, CryptoEngine, KeyUsage};
use crate::error::Result;
use crate::{guard, Pending};

#[derive(Clone, Copy)]
struct Ctr {
    name: &'static str,
    key_bytes: usize,
    nonce_bytes: usize,
}

const AES128_CTR: Ctr = Ctr {
    name: "stream_aes128ctr",
    key_bytes: STREAM_AES128CTR_KEYBYTES,
    nonce_bytes: STREAM_AES128CTR_NONCEBYTES,
};

const AES256_CTR: Ctr = Ctr {
    name: "stream_aes256ctr",
    key_bytes: STREAM_AES256CTR_KEYBYTES,
    nonce_bytes: STREAM_AES256CTR_NONCEBYTES,
};

/// What gets XORed with the keystream. `Zeros` is only allocated once the
/// call has passed validation.
enum Input<'a> {
    Message(&'a [u8]),
    Zeros(usize),
}

pub struct StreamFacade<E> {
    engine: Arc<E>,
}

impl<E: CryptoEngine> StreamFacade<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// Generic stream XOR; AES-256-CTR.
    pub fn stream_xor<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream_aes256ctr_xor(key, nonce, msg)
    }

    /// Generic raw keystream; AES-256-CTR.
    pub fn stream<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        len: usize,
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.stream_aes256ctr(key, nonce, len)
    }

    /// XOR `msg` with the AES-128-CTR keystream. Encrypts and decrypts.
    pub fn stream_aes128ctr_xor<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.xor(AES128_CTR, key, nonce, Input::Message(msg))
    }

    /// `len` bytes of raw AES-128-CTR keystream.
    pub fn stream_aes128ctr<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        len: usize,
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.xor(AES128_CTR, key, nonce, Input::Zeros(len))
    }

    /// XOR `msg` with the AES-256-CTR keystream. Encrypts and decrypts.
    pub fn stream_aes256ctr_xor<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        msg: &'a [u8],
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.xor(AES256_CTR, key, nonce, Input::Message(msg))
    }

    /// `len` bytes of raw AES-256-CTR keystream.
    pub fn stream_aes256ctr<'a>(
        &'a self,
        key: &'a [u8],
        nonce: &'a [u8],
        len: usize,
    ) -> Result<Pending<'a, Vec<u8>>> {
        self.xor(AES256_CTR, key, nonce, Input::Zeros(len))
    }

    fn xor<'a>(
        &'a self,
        ctr: Ctr,
        key: &'a [u8],
        nonce: &'a [u8],
        input: Input<'a>,
    ) -> Result<Pending<'a, Vec<u8>>> {
        guard::key_size(ctr.name, key, ctr.key_bytes)?;
        guard::nonce_size(ctr.name, nonce, ctr.nonce_bytes)?;

        let engine = &self.engine;
        Ok(async move {
            let handle = engine
                .import_key(key, Algorithm::AesCtr, KeyUsage::Encrypt)
                .await?;
            let zeros;
            let msg = match input {
                Input::Message(msg) => msg,
                Input::Zeros(len) => {
                    zeros = vec![0u8; len];
                    zeros.as_slice()
                }
            };
            tracing::trace!(op = ctr.name, len = msg.len(), "applying keystream");
            engine
                .ctr_encrypt(&handle, nonce, STREAM_COUNTER_BITS, msg)
                .await
        }
        .boxed())
    }
}

impl<E> Clone for StreamFacade<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
