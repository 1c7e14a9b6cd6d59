// src/consts.rs

//! Byte-length constants for every primitive family.
//!
//! Callers size their buffers with these instead of hard-coding widths.

use crate::engine::HashAlgorithm;

pub const HASH_SHA256_BYTES: usize = HashAlgorithm::Sha256.output_len();
pub const HASH_SHA512_BYTES: usize = HashAlgorithm::Sha512.output_len();
/// Output width of the generic `hash` (SHA-512).
pub const HASH_BYTES: usize = HASH_SHA512_BYTES;

pub const AUTH_HMACSHA256_BYTES: usize = 32;
pub const AUTH_HMACSHA256_KEYBYTES: usize = 32;
pub const AUTH_HMACSHA512_BYTES: usize = 64;
/// HMAC-SHA512 keys are as wide as the MAC they produce.
pub const AUTH_HMACSHA512_KEYBYTES: usize = AUTH_HMACSHA512_BYTES;
/// Output width of the generic `auth` (HMAC-SHA512).
pub const AUTH_BYTES: usize = AUTH_HMACSHA512_BYTES;
pub const AUTH_KEYBYTES: usize = AUTH_HMACSHA512_KEYBYTES;

pub const SECRETBOX_AES256GCM_KEYBYTES: usize = 32;
pub const SECRETBOX_AES256GCM_NONCEBYTES: usize = 16;
pub const SECRETBOX_AES256GCM_MACBYTES: usize = 16;
pub const SECRETBOX_KEYBYTES: usize = SECRETBOX_AES256GCM_KEYBYTES;
pub const SECRETBOX_NONCEBYTES: usize = SECRETBOX_AES256GCM_NONCEBYTES;
pub const SECRETBOX_MACBYTES: usize = SECRETBOX_AES256GCM_MACBYTES;

pub const STREAM_AES128CTR_KEYBYTES: usize = 16;
pub const STREAM_AES256CTR_KEYBYTES: usize = 32;
pub const STREAM_AES128CTR_NONCEBYTES: usize = 16;
pub const STREAM_AES256CTR_NONCEBYTES: usize = 16;
pub const STREAM_KEYBYTES: usize = STREAM_AES256CTR_KEYBYTES;
pub const STREAM_NONCEBYTES: usize = STREAM_AES256CTR_NONCEBYTES;

/// Width, in bits, of the big-endian block counter at the tail of a CTR nonce.
pub(crate) const STREAM_COUNTER_BITS: usize = 32;
/// GCM tag length handed to the engine.
pub(crate) const SECRETBOX_TAG_BITS: usize = SECRETBOX_AES256GCM_MACBYTES * 8;
