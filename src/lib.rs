// src/lib.rs

//! # naclite
//!
//! NaCl-style hashing, HMAC, AES-GCM secretbox and AES-CTR stream APIs over
//! a pluggable cryptographic engine.
//!
//! Calls that take keys, nonces or MACs are two-phase: the call itself
//! returns `Err` for any malformed size, and only on success hands back a
//! [`Pending`] future that imports the key and runs the transform.
//!
//! Currently provides:
//! - `hash`: SHA-256, SHA-512
//! - `auth`: HMAC-SHA256, HMAC-SHA512
//! - `secretbox`: AES-256-GCM, 16-byte nonce, 128-bit tag
//! - `stream`: AES-128-CTR, AES-256-CTR

pub mod auth;
pub mod consts;
pub mod engine;
pub mod error;
mod guard;
pub mod hash;
pub mod nacl;
pub mod secretbox;
#[cfg(feature = "software")]
pub mod software;
pub mod stream;

pub use auth::{AuthFacade, HmacSha256Mac, HmacSha512Mac, Verification};
pub use consts::*;
pub use engine::{Algorithm, CryptoEngine, HashAlgorithm, KeyUsage};
pub use error::{Error, Result};
pub use hash::{HashFacade, Sha256Digest, Sha512Digest};
pub use nacl::Nacl;
pub use secretbox::SecretboxFacade;
#[cfg(feature = "software")]
pub use software::{SoftwareEngine, SoftwareKey};
pub use stream::StreamFacade;

/// A validated operation still in flight.
pub type Pending<'a, T> = futures::future::BoxFuture<'a, Result<T>>;
