use thiserror::Error;

/// Errors returned by scalar validation, PEM decoding and signature
/// verification.
///
/// Every failure is raised synchronously at the call that detects it; nothing
/// is logged, swallowed or collapsed into a bare `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Secret scalar outside `(0, group order]`.
    #[error("secret scalar must be greater than 0 and less than or equal to the group order")]
    InvalidScalar,
    /// Public key byte length other than 33 (compressed) or 65 (uncompressed).
    #[error("{0} is an invalid length for a public key")]
    InvalidPublicKeyLength(usize),
    /// Length-valid public key bytes that do not encode a curve point.
    #[error("public key bytes do not encode a valid curve point")]
    MalformedPublicKey,
    /// Signature bytes rejected by the DER parser.
    #[error("signature is not valid DER")]
    MalformedSignature,
    /// A message hasher produced a digest of other than 32 bytes.
    #[error("message hash must be 32 bytes long, got {0}")]
    InvalidDigestLength(usize),
    /// PEM framing missing or damaged, or the base64 body failed to decode.
    #[error("input is not a valid PEM private key")]
    InvalidPem,
}
