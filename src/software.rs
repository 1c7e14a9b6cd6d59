// src/software.rs

//! Pure-Rust engine backed by the RustCrypto crates.
//!
//! Supports:
//! - SHA-256 / SHA-512 digests
//! - HMAC over either digest, any non-empty key
//! - AES-128/256-GCM with 12- or 16-byte nonces and 128-bit tags
//! - AES-128/256-CTR with 32, 64 or 128-bit big-endian counters

use core::fmt;

use aes::{Aes128, Aes256};
use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::{Aead, Nonce};
use aes_gcm::{AesGcm, KeyInit};
use async_trait::async_trait;
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::{Ctr128BE, Ctr32BE, Ctr64BE};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::engine::{Algorithm, CryptoEngine, HashAlgorithm, KeyUsage};
use crate::error::{Error, Result};

const AES_BLOCK_SIZE: usize = 16;
const GCM_TAG_BITS: usize = 128;

/// Stateless engine; cheap to construct and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareEngine;

impl SoftwareEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Key handle for [`SoftwareEngine`]. The bytes are wiped on drop and never
/// handed back out.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SoftwareKey {
    material: Vec<u8>,
    #[zeroize(skip)]
    algorithm: Algorithm,
    #[zeroize(skip)]
    usage: KeyUsage,
}

impl SoftwareKey {
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn usage(&self) -> KeyUsage {
        self.usage
    }

    fn require(&self, algorithm: fn(Algorithm) -> bool, usages: &[KeyUsage]) -> Result<()> {
        if !algorithm(self.algorithm) {
            return Err(Error::engine(format!(
                "key imported for {:?} cannot be used here",
                self.algorithm
            )));
        }
        if !usages.contains(&self.usage) {
            return Err(Error::engine(format!(
                "key imported for {:?} cannot be used for {:?}",
                self.usage, usages
            )));
        }
        Ok(())
    }

    fn hmac_hash(&self) -> Result<HashAlgorithm> {
        match self.algorithm {
            Algorithm::Hmac(hash) => Ok(hash),
            other => Err(Error::engine(format!("{other:?} key is not an HMAC key"))),
        }
    }
}

impl fmt::Debug for SoftwareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftwareKey")
            .field("algorithm", &self.algorithm)
            .field("usage", &self.usage)
            .field("len", &self.material.len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CryptoEngine for SoftwareEngine {
    type KeyHandle = SoftwareKey;

    async fn import_key(
        &self,
        raw: &[u8],
        algorithm: Algorithm,
        usage: KeyUsage,
    ) -> Result<SoftwareKey> {
        let usage_ok = match algorithm {
            Algorithm::Hmac(_) => matches!(usage, KeyUsage::Sign | KeyUsage::Verify),
            Algorithm::AesGcm | Algorithm::AesCtr => {
                matches!(usage, KeyUsage::Encrypt | KeyUsage::Decrypt)
            }
        };
        if !usage_ok {
            return Err(Error::engine(format!(
                "{usage:?} is not a valid usage for {algorithm:?}"
            )));
        }

        let material_ok = match algorithm {
            Algorithm::Hmac(_) => !raw.is_empty(),
            Algorithm::AesGcm | Algorithm::AesCtr => matches!(raw.len(), 16 | 32),
        };
        if !material_ok {
            return Err(Error::InvalidKeyMaterial);
        }

        tracing::trace!(?algorithm, ?usage, "software engine imported key");
        Ok(SoftwareKey {
            material: raw.to_vec(),
            algorithm,
            usage,
        })
    }

    async fn digest(&self, algorithm: HashAlgorithm, msg: &[u8]) -> Result<Vec<u8>> {
        Ok(match algorithm {
            HashAlgorithm::Sha256 => Sha256::digest(msg).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(msg).to_vec(),
        })
    }

    async fn hmac_sign(&self, key: &SoftwareKey, msg: &[u8]) -> Result<Vec<u8>> {
        key.require(|a| matches!(a, Algorithm::Hmac(_)), &[KeyUsage::Sign])?;
        Ok(match key.hmac_hash()? {
            HashAlgorithm::Sha256 => keyed::<Hmac<Sha256>>(&key.material, msg)?
                .finalize()
                .into_bytes()
                .to_vec(),
            HashAlgorithm::Sha512 => keyed::<Hmac<Sha512>>(&key.material, msg)?
                .finalize()
                .into_bytes()
                .to_vec(),
        })
    }

    async fn hmac_verify(&self, key: &SoftwareKey, msg: &[u8], mac: &[u8]) -> Result<bool> {
        key.require(|a| matches!(a, Algorithm::Hmac(_)), &[KeyUsage::Verify])?;
        // verify_slice compares in constant time and rejects length mismatches.
        Ok(match key.hmac_hash()? {
            HashAlgorithm::Sha256 => keyed::<Hmac<Sha256>>(&key.material, msg)?
                .verify_slice(mac)
                .is_ok(),
            HashAlgorithm::Sha512 => keyed::<Hmac<Sha512>>(&key.material, msg)?
                .verify_slice(mac)
                .is_ok(),
        })
    }

    async fn aead_encrypt(
        &self,
        key: &SoftwareKey,
        nonce: &[u8],
        tag_bits: usize,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        key.require(|a| a == Algorithm::AesGcm, &[KeyUsage::Encrypt])?;
        gcm(KeyUsage::Encrypt, &key.material, nonce, tag_bits, msg)
    }

    async fn aead_decrypt(
        &self,
        key: &SoftwareKey,
        nonce: &[u8],
        tag_bits: usize,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        key.require(|a| a == Algorithm::AesGcm, &[KeyUsage::Decrypt])?;
        gcm(KeyUsage::Decrypt, &key.material, nonce, tag_bits, ciphertext)
    }

    async fn ctr_encrypt(
        &self,
        key: &SoftwareKey,
        counter_block: &[u8],
        counter_bits: usize,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        key.require(
            |a| a == Algorithm::AesCtr,
            &[KeyUsage::Encrypt, KeyUsage::Decrypt],
        )?;
        if counter_block.len() != AES_BLOCK_SIZE {
            return Err(Error::engine(format!(
                "AES-CTR counter block must be {AES_BLOCK_SIZE} bytes, got {}",
                counter_block.len()
            )));
        }

        let k = key.material.as_slice();
        match (k.len(), counter_bits) {
            (16, 32) => ctr_xor::<Ctr32BE<Aes128>>(k, counter_block, msg),
            (32, 32) => ctr_xor::<Ctr32BE<Aes256>>(k, counter_block, msg),
            (16, 64) => ctr_xor::<Ctr64BE<Aes128>>(k, counter_block, msg),
            (32, 64) => ctr_xor::<Ctr64BE<Aes256>>(k, counter_block, msg),
            (16, 128) => ctr_xor::<Ctr128BE<Aes128>>(k, counter_block, msg),
            (32, 128) => ctr_xor::<Ctr128BE<Aes256>>(k, counter_block, msg),
            (16 | 32, bits) => Err(Error::engine(format!(
                "unsupported AES-CTR counter length: {bits} bits"
            ))),
            _ => Err(Error::InvalidKeyMaterial),
        }
    }
}

fn keyed<M>(key: &[u8], msg: &[u8]) -> Result<M>
where
    M: Mac + hmac::digest::KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| Error::InvalidKeyMaterial)?;
    mac.update(msg);
    Ok(mac)
}

fn gcm(
    direction: KeyUsage,
    key: &[u8],
    nonce: &[u8],
    tag_bits: usize,
    data: &[u8],
) -> Result<Vec<u8>> {
    if tag_bits != GCM_TAG_BITS {
        return Err(Error::engine(format!(
            "unsupported AES-GCM tag length: {tag_bits} bits"
        )));
    }

    match (key.len(), nonce.len()) {
        (16, 12) => gcm_with::<AesGcm<Aes128, U12>>(direction, key, nonce, data),
        (32, 12) => gcm_with::<AesGcm<Aes256, U12>>(direction, key, nonce, data),
        (16, 16) => gcm_with::<AesGcm<Aes128, U16>>(direction, key, nonce, data),
        (32, 16) => gcm_with::<AesGcm<Aes256, U16>>(direction, key, nonce, data),
        (16 | 32, n) => Err(Error::engine(format!(
            "unsupported AES-GCM nonce length: {n} bytes"
        ))),
        _ => Err(Error::InvalidKeyMaterial),
    }
}

fn gcm_with<C>(direction: KeyUsage, key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidKeyMaterial)?;
    // Length already matched against C's nonce size by the caller.
    let nonce = Nonce::<C>::from_slice(nonce);
    match direction {
        KeyUsage::Decrypt => cipher
            .decrypt(nonce, data)
            .map_err(|_| Error::AuthenticationFailed),
        _ => cipher
            .encrypt(nonce, data)
            .map_err(|_| Error::engine("AES-GCM encryption failed")),
    }
}

fn ctr_xor<C>(key: &[u8], iv: &[u8], msg: &[u8]) -> Result<Vec<u8>>
where
    C: KeyIvInit + StreamCipher,
{
    let mut cipher = C::new_from_slices(key, iv).map_err(|_| Error::InvalidKeyMaterial)?;
    let mut out = msg.to_vec();
    cipher
        .try_apply_keystream(&mut out)
        .map_err(|_| Error::engine("AES-CTR counter space exhausted"))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: core::future::Future>(fut: F) -> F::Output {
        futures::executor::block_on(fut)
    }

    #[test]
    fn test_rfc4231_case_1_sha256() {
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(
            &[0x0b; 20],
            Algorithm::Hmac(HashAlgorithm::Sha256),
            KeyUsage::Sign,
        ))
        .unwrap();
        let mac = block_on(engine.hmac_sign(&key, b"Hi There")).unwrap();
        assert_eq!(
            hex::encode(&mac),
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
        );
    }

    #[test]
    fn test_rfc4231_case_2_sha512() {
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(
            b"Jefe",
            Algorithm::Hmac(HashAlgorithm::Sha512),
            KeyUsage::Sign,
        ))
        .unwrap();
        let mac = block_on(engine.hmac_sign(&key, b"what do ya want for nothing?")).unwrap();
        assert_eq!(
            hex::encode(&mac),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_digest_width_matches_output_len() {
        let engine = SoftwareEngine::new();
        for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
            let out = block_on(engine.digest(algorithm, b"abc")).unwrap();
            assert_eq!(out.len(), algorithm.output_len());
        }
    }

    #[test]
    fn test_key_reports_import_parameters() {
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(
            &[3u8; 64],
            Algorithm::Hmac(HashAlgorithm::Sha512),
            KeyUsage::Verify,
        ))
        .unwrap();
        assert_eq!(key.algorithm(), Algorithm::Hmac(HashAlgorithm::Sha512));
        assert_eq!(key.usage(), KeyUsage::Verify);
    }

    #[test]
    fn test_import_rejects_bad_aes_key_length() {
        let engine = SoftwareEngine::new();
        let result = block_on(engine.import_key(&[0u8; 24], Algorithm::AesGcm, KeyUsage::Encrypt));
        assert!(matches!(result, Err(Error::InvalidKeyMaterial)));
    }

    #[test]
    fn test_import_rejects_empty_hmac_key() {
        let engine = SoftwareEngine::new();
        let result = block_on(engine.import_key(
            &[],
            Algorithm::Hmac(HashAlgorithm::Sha256),
            KeyUsage::Sign,
        ));
        assert!(matches!(result, Err(Error::InvalidKeyMaterial)));
    }

    #[test]
    fn test_import_rejects_mismatched_usage() {
        let engine = SoftwareEngine::new();
        let result = block_on(engine.import_key(&[1u8; 32], Algorithm::AesGcm, KeyUsage::Sign));
        assert!(matches!(result, Err(Error::EngineFault(_))));
    }

    #[test]
    fn test_sign_key_cannot_verify() {
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(
            &[7u8; 32],
            Algorithm::Hmac(HashAlgorithm::Sha256),
            KeyUsage::Sign,
        ))
        .unwrap();
        let result = block_on(engine.hmac_verify(&key, b"msg", &[0u8; 32]));
        assert!(matches!(result, Err(Error::EngineFault(_))));
    }

    #[test]
    fn test_gcm_rejects_other_tag_lengths() {
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(&[1u8; 32], Algorithm::AesGcm, KeyUsage::Encrypt))
            .unwrap();
        let result = block_on(engine.aead_encrypt(&key, &[0u8; 16], 96, b"msg"));
        assert!(matches!(result, Err(Error::EngineFault(_))));
    }

    #[test]
    fn test_gcm_12_byte_nonce_roundtrip() {
        let engine = SoftwareEngine::new();
        let enc = block_on(engine.import_key(&[3u8; 16], Algorithm::AesGcm, KeyUsage::Encrypt))
            .unwrap();
        let dec = block_on(engine.import_key(&[3u8; 16], Algorithm::AesGcm, KeyUsage::Decrypt))
            .unwrap();
        let ct = block_on(engine.aead_encrypt(&enc, &[9u8; 12], 128, b"twelve")).unwrap();
        assert_eq!(ct.len(), 6 + 16);
        let pt = block_on(engine.aead_decrypt(&dec, &[9u8; 12], 128, &ct)).unwrap();
        assert_eq!(pt, b"twelve");
    }

    #[test]
    fn test_ctr_full_width_counter_carries() {
        // With a 128-bit counter the increment carries into the prefix, so the
        // second block differs from the 32-bit flavour.
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(&[5u8; 16], Algorithm::AesCtr, KeyUsage::Encrypt))
            .unwrap();
        let mut iv = [0u8; 16];
        iv[12..].copy_from_slice(&[0xff; 4]);
        let narrow = block_on(engine.ctr_encrypt(&key, &iv, 32, &[0u8; 32])).unwrap();
        let wide = block_on(engine.ctr_encrypt(&key, &iv, 128, &[0u8; 32])).unwrap();
        assert_eq!(narrow[..16], wide[..16]);
        assert_ne!(narrow[16..], wide[16..]);
    }

    #[test]
    fn test_debug_does_not_leak_material() {
        let engine = SoftwareEngine::new();
        let key = block_on(engine.import_key(&[0xAB; 16], Algorithm::AesCtr, KeyUsage::Encrypt))
            .unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("171"));
        assert!(rendered.contains("len: 16"));
    }
}
