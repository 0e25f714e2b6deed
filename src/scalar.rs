//! Private-key scalar padding, range validation and random generation.
//!
//! A scalar is valid as a private key when its integer value lies in
//! `(0, group order]`. Valid scalars are always handled in their fixed
//! 32-byte, zero-left-padded form so that downstream curve arithmetic never
//! sees a variable-width encoding.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRngCore, OsRng};
use zeroize::Zeroize;

use crate::codec::bytes_to_int;
use crate::constants::{GROUP_ORDER, KEY_SIZE};
use crate::error::Error;

static GROUP_ORDER_INT: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_bytes_be(&GROUP_ORDER));

/// Truncate `scalar` to its low-order 32 bytes and left-pad with zeros.
///
/// A pure transform; it does not check the value against the group order.
pub fn pad_scalar(scalar: &[u8]) -> [u8; KEY_SIZE] {
    let tail = if scalar.len() > KEY_SIZE {
        &scalar[scalar.len() - KEY_SIZE..]
    } else {
        scalar
    };
    let mut padded = [0u8; KEY_SIZE];
    padded[KEY_SIZE - tail.len()..].copy_from_slice(tail);
    padded
}

/// Check that `secret` lies in `(0, group order]` and return its 32-byte
/// zero-padded form.
///
/// The comparison is performed on integer values, never on raw byte strings,
/// so inputs of any width are compared correctly.
pub fn validate_secret(secret: &[u8]) -> Result<[u8; KEY_SIZE], Error> {
    let value = bytes_to_int(secret);
    if value.is_zero() || value > *GROUP_ORDER_INT {
        return Err(Error::InvalidScalar);
    }
    Ok(pad_scalar(secret))
}

/// Draw 32-byte scalars from `rng` until one lies in `(0, group order]`.
///
/// The out-of-range probability per draw is roughly `2^-128`, but the loop is
/// still required for correctness. Rejected draws are wiped before retrying.
pub fn generate_secret<R: CryptoRngCore>(rng: &mut R) -> [u8; KEY_SIZE] {
    loop {
        let mut candidate = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut candidate);
        if validate_secret(&candidate).is_ok() {
            return candidate;
        }
        candidate.zeroize();
    }
}

/// Draw a valid private-key scalar from the operating system's secure random
/// source.
pub fn get_valid_secret() -> [u8; KEY_SIZE] {
    generate_secret(&mut OsRng)
}
