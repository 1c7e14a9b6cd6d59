// tests/hash_tests.rs

use naclite::{Nacl, HASH_BYTES, HASH_SHA256_BYTES, HASH_SHA512_BYTES};

#[tokio::test]
async fn test_sha256_quick_brown_fox() {
    let nacl = Nacl::software();
    let digest = nacl
        .hash_sha256(b"The quick brown fox jumps over the lazy dog")
        .await
        .unwrap();
    assert_eq!(
        hex::encode(digest),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );
}

#[tokio::test]
async fn test_digest_lengths() {
    let nacl = Nacl::software();
    assert_eq!(nacl.hash_sha256(b"x").await.unwrap().len(), HASH_SHA256_BYTES);
    assert_eq!(nacl.hash_sha512(b"x").await.unwrap().len(), HASH_SHA512_BYTES);
    assert_eq!(nacl.hash(b"x").await.unwrap().len(), HASH_BYTES);
}

#[tokio::test]
async fn test_generic_hash_is_sha512() {
    let nacl = Nacl::software();
    let msg = b"The quick brown fox jumps over the lazy dog.";
    assert_eq!(
        nacl.hash(msg).await.unwrap(),
        nacl.hash_sha512(msg).await.unwrap()
    );
}

#[tokio::test]
async fn test_empty_message() {
    let nacl = Nacl::software();
    assert_eq!(
        hex::encode(nacl.hash_sha256(b"").await.unwrap()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[tokio::test]
async fn test_one_byte_change_changes_digest() {
    let nacl = Nacl::software();
    let a = nacl.hash_sha256(b"message").await.unwrap();
    let b = nacl.hash_sha256(b"messagf").await.unwrap();
    assert_ne!(a, b);
}
