use xxhash_rust::xxh3::xxh3_128;

/// Lowercase hex digest of the xxh3-128 hash, 32 characters.
pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:032x}", xxh3_128(input))
}

#[test]
fn test_xxhash_hex() {
  let digest = xxhash_hex(b"hello");
  assert_eq!(digest.len(), 32);
  assert_eq!(digest, xxhash_hex(b"hello"));
  assert_ne!(digest, xxhash_hex(b"hello!"));
  assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
}
