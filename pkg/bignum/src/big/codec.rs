//! A plain (ungrouped, no separators) big-endian hex representation used for
//! `Debug` output and this crate's own tests. The grouped, spaced hex format
//! ElGamal key and ciphertext files use lives in the `elgamal` crate, one
//! layer up — this module has no opinion on file formats, only on giving a
//! `BigUint` a readable `Debug` impl.

use crate::big::uint::BigUint;

pub fn to_hex(x: &BigUint) -> String {
    let bytes = x.to_minimal_be_bytes();
    if bytes.is_empty() {
        return "0".to_string();
    }
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02X}", b));
    }
    s
}

pub fn from_hex(s: &str) -> Option<BigUint> {
    let digits: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    if digits.is_empty() {
        return Some(BigUint::zero());
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
        bytes.push(u8::from_str_radix(&byte_str, 16).ok()?);
    }
    Some(BigUint::from_be_bytes(&bytes))
}
