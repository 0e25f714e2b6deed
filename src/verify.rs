//! ECDSA signature verification against the secp256k1 primitive library.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, Verification};

use crate::error::Error;
use crate::hash::{sha256, DIGEST_SIZE};

/// Verify a DER-encoded ECDSA signature over `message` with the default
/// SHA-256 hasher.
///
/// See [`verify_signature_with_hasher`] for the full pipeline.
pub fn verify_signature<C: Verification>(
    ctx: &Secp256k1<C>,
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
) -> Result<bool, Error> {
    verify_signature_with_hasher(ctx, signature, message, public_key, sha256)
}

/// Verify a DER-encoded ECDSA signature with a caller-supplied hasher.
///
/// `public_key` must be a 33-byte compressed or 65-byte uncompressed SEC1
/// encoding, and `hasher` must produce a 32-byte digest. The cryptographic
/// check itself is delegated to `ctx`, which is only read and may be shared
/// across concurrent verifications.
///
/// Returns `Ok(false)` for a well-formed signature that does not verify;
/// malformed inputs fail with a typed [`Error`] instead.
pub fn verify_signature_with_hasher<C, H>(
    ctx: &Secp256k1<C>,
    signature: &[u8],
    message: &[u8],
    public_key: &[u8],
    hasher: H,
) -> Result<bool, Error>
where
    C: Verification,
    H: Fn(&[u8]) -> Vec<u8>,
{
    let length = public_key.len();
    if length != 33 && length != 65 {
        return Err(Error::InvalidPublicKeyLength(length));
    }
    let pubkey = PublicKey::from_slice(public_key).map_err(|_| Error::MalformedPublicKey)?;

    let digest: [u8; DIGEST_SIZE] = hasher(message)
        .try_into()
        .map_err(|bad: Vec<u8>| Error::InvalidDigestLength(bad.len()))?;

    let sig = Signature::from_der(signature).map_err(|_| Error::MalformedSignature)?;

    Ok(ctx
        .verify_ecdsa(&Message::from_digest(digest), &sig, &pubkey)
        .is_ok())
}
