//! Scalar arithmetic and ECDSA signature utilities for the secp256k1 curve.
//!
//! This crate sits between application code and the [`secp256k1`] primitive
//! library. It converts between big-endian byte strings and arbitrary-precision
//! integers, validates and pads private-key scalars, draws cryptographically
//! secure random scalars, hashes messages, converts private keys between DER
//! and PEM framing, and verifies DER-encoded ECDSA signatures through an
//! explicitly passed verification context.
//!
//! Curve point arithmetic, public-key parsing and the verification algorithm
//! itself are delegated to [`secp256k1`]; everything else here is a pure,
//! self-contained transform.
//!
//! # Usage
//! ```
//! use secp256k1_utils::{get_valid_secret, validate_secret, verify_signature};
//! use secp256k1_utils::secp256k1::{Secp256k1, SecretKey, Message, PublicKey};
//! use secp256k1_utils::sha256;
//!
//! // Draw a private-key scalar and check it is in range.
//! let secret = get_valid_secret();
//! assert_eq!(validate_secret(&secret).unwrap(), secret);
//!
//! // Sign with the primitive library, verify through this crate.
//! let ctx = Secp256k1::new();
//! let secret_key = SecretKey::from_slice(&secret).unwrap();
//! let public_key = PublicKey::from_secret_key(&ctx, &secret_key);
//!
//! let message = b"hello";
//! let digest: [u8; 32] = sha256(message).try_into().unwrap();
//! let signature = ctx.sign_ecdsa(&Message::from_digest(digest), &secret_key);
//!
//! let verified = verify_signature(
//!     &ctx,
//!     &signature.serialize_der(),
//!     message,
//!     &public_key.serialize(),
//! )
//! .unwrap();
//! assert!(verified);
//! ```

mod codec;
mod constants;
mod error;
mod hash;
mod pem;
mod scalar;
mod verify;

pub use codec::{bytes_to_int, int_to_bytes};
pub use constants::{GROUP_ORDER, KEY_SIZE, PEM_FOOTER, PEM_HEADER};
pub use error::Error;
pub use hash::{sha256, DIGEST_SIZE};
pub use pem::{der_to_pem, pem_to_der};
pub use scalar::{generate_secret, get_valid_secret, pad_scalar, validate_secret};
pub use verify::{verify_signature, verify_signature_with_hasher};

pub use secp256k1;
