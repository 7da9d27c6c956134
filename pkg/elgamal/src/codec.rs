//! The key-file and ciphertext-file hex format: big-endian, uppercase, no
//! `0x` prefix, grouped into 16-character chunks separated by a single
//! space on output. Decoding ignores any character outside `[0-9A-Fa-f]`
//! (so input may carry the same spacing, or none, or arbitrary wrapping).

use bignum::BigUint;

use crate::error::{Error, Field};

pub fn encode(x: &BigUint) -> String {
    let bytes = x.to_minimal_be_bytes();
    let hex: String = if bytes.is_empty() {
        "00".to_string()
    } else {
        bytes.iter().map(|b| format!("{:02X}", b)).collect()
    };
    group(&hex)
}

/// Inserts a space every 16 characters, counting from the right so a
/// shorter leading group (rather than a shorter trailing one) absorbs the
/// remainder — matching how the digit sequence itself is built from the
/// least-significant end.
fn group(hex: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    let n = chars.len();
    let head = n % 16;

    let mut groups = Vec::new();
    let mut start = 0;
    if head != 0 {
        groups.push(chars[0..head].iter().collect::<String>());
        start = head;
    }
    while start < n {
        groups.push(chars[start..start + 16].iter().collect::<String>());
        start += 16;
    }
    groups.join(" ")
}

/// Decodes a hex value from a key- or ciphertext-file field. Non-hex
/// characters (spaces, the label's trailing separator, stray punctuation)
/// are ignored. A field with no hex digits at all is reported as
/// unparseable rather than silently treated as zero, since that almost
/// always means the field was truncated or corrupted rather than
/// genuinely meant to encode zero.
pub fn decode(s: &str) -> Result<BigUint, Error> {
    let digits: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    if digits.is_empty() {
        return Err(Error::Hex(s.to_string()));
    }

    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits
    };

    let mut bytes = Vec::with_capacity(padded.len() / 2);
    let chars: Vec<char> = padded.chars().collect();
    for chunk in chars.chunks(2) {
        let byte_str: String = chunk.iter().collect();
        let byte = u8::from_str_radix(&byte_str, 16).map_err(|_| Error::Hex(s.to_string()))?;
        bytes.push(byte);
    }

    Ok(BigUint::from_be_bytes(&bytes))
}

/// Used by [`crate::keyfile`] to turn a missing label into the right
/// `Field` discriminant rather than a generic hex error.
pub fn missing(field: Field) -> Error {
    Error::MissingField(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_produces_expected_integer() {
        let x = decode("DEADBEEF").unwrap();
        assert_eq!(x, BigUint::from_digit(0xDEADBEEF));
    }

    #[test]
    fn encode_matches_decode_input_modulo_spacing() {
        let x = decode("DEADBEEF").unwrap();
        assert_eq!(encode(&x), "DEADBEEF");
    }

    #[test]
    fn decode_ignores_surrounding_whitespace_and_grouping() {
        let a = decode("DEAD BEEF CAFE BABE 1234 5678 90AB CDEF").unwrap();
        let b = decode("DEADBEEFCAFEBABE1234567890ABCDEF").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn encode_groups_in_sixteen_character_chunks() {
        let x = decode("123456789ABCDEF0123456789ABCDEF0").unwrap();
        let out = encode(&x);
        let groups: Vec<&str> = out.split(' ').collect();
        assert!(groups.len() > 1);
        // Every group but the (possibly short) leading one is a full
        // 16-character chunk.
        for g in &groups[1..] {
            assert_eq!(g.len(), 16);
        }
        assert!(groups[0].len() <= 16);
    }

    #[test]
    fn zero_encodes_as_00() {
        assert_eq!(encode(&BigUint::zero()), "00");
    }

    #[test]
    fn empty_field_is_unparseable() {
        assert!(matches!(decode("   "), Err(Error::Hex(_))));
    }

    #[test]
    fn roundtrip_is_idempotent() {
        let x = decode("FFEEDDCCBBAA9988").unwrap();
        let again = decode(&encode(&x)).unwrap();
        assert_eq!(x, again);
    }
}
