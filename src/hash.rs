use sha2::{Digest, Sha256};

/// Required digest width for signature verification, in bytes.
pub const DIGEST_SIZE: usize = 32;

/// SHA-256 digest of `data`.
///
/// This is the default message-hashing step before verification. It satisfies
/// the hasher contract [`verify_signature_with_hasher`] accepts: bytes in,
/// 32 bytes out.
///
/// [`verify_signature_with_hasher`]: crate::verify_signature_with_hasher
pub fn sha256(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_fixture() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_is_32_bytes() {
        assert_eq!(sha256(b"arbitrary message").len(), DIGEST_SIZE);
    }
}
