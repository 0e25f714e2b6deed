//! Big-endian byte/integer codec.

use num_bigint::BigUint;

/// Interpret `bytes` as an unsigned big-endian integer.
///
/// There is no length restriction; empty input yields zero. Negative values
/// are unrepresentable by construction, so the inverse direction never has to
/// reject them at runtime.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encode `num` as the minimal big-endian byte string.
///
/// Always at least one byte: zero encodes as `[0]`.
pub fn int_to_bytes(num: &BigUint) -> Vec<u8> {
    num.to_bytes_be()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn empty_input_is_zero() {
        assert!(bytes_to_int(&[]).is_zero());
    }

    #[test]
    fn zero_encodes_as_one_byte() {
        assert_eq!(int_to_bytes(&BigUint::zero()), vec![0]);
    }

    #[test]
    fn round_trip_strips_leading_zeros() {
        let cases: [&[u8]; 5] = [
            &[0x01],
            &[0x00, 0x01],
            &[0x00, 0x00, 0xff, 0xfe],
            &[0x80; 32],
            &[0x00],
        ];
        for bytes in cases {
            let minimal: Vec<u8> = {
                let stripped: Vec<u8> =
                    bytes.iter().copied().skip_while(|&b| b == 0).collect();
                if stripped.is_empty() {
                    vec![0]
                } else {
                    stripped
                }
            };
            assert_eq!(int_to_bytes(&bytes_to_int(bytes)), minimal);
        }
    }

    #[test]
    fn big_endian_interpretation() {
        assert_eq!(bytes_to_int(&[0x01, 0x00]), BigUint::from(256_u32));
        assert_eq!(int_to_bytes(&BigUint::from(0xdead_beef_u32)), vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
