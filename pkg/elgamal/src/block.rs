//! Plaintext block packing: a fixed-size byte chunk treated as a big-endian
//! base-256 number, with C-string-style early termination at the first zero
//! byte.

use bignum::BigUint;

/// Packs `bytes` into a `BigUint`. Scans for the first zero byte; only the
/// bytes before it contribute to the value. A block with no zero byte
/// packs in full.
pub fn pack(bytes: &[u8]) -> BigUint {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    BigUint::from_be_bytes(&bytes[..end])
}

/// Unpacks `m` back into a `block_size`-byte plaintext block. `m`'s own
/// minimal big-endian bytes become the leading content; the remaining
/// bytes (everything from the terminator onward in the original block)
/// are zero-filled.
///
/// Panics if `m`'s minimal byte length exceeds `block_size` — that would
/// mean `m` came from somewhere other than [`pack`] with this same block
/// size, which is a caller bug, not a recoverable condition.
pub fn unpack(m: &BigUint, block_size: usize) -> Vec<u8> {
    let mut out = m.to_minimal_be_bytes();
    assert!(
        out.len() <= block_size,
        "packed value does not fit in a block of {} bytes",
        block_size
    );
    out.resize(block_size, 0);
    out
}

/// Block size in bytes for a key of the given bit width: `⌊bits/16⌋`,
/// chosen so `8*B < bits` with a comfortable margin — packed blocks always
/// land strictly below the prime modulus.
pub fn block_size_for_bits(bits: u32) -> usize {
    (bits / 16) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_stops_at_first_zero_byte() {
        let m = pack(b"Hi\0\0\0\0\0\0");
        assert_eq!(m, BigUint::from_be_bytes(b"Hi"));
    }

    #[test]
    fn pack_with_no_zero_byte_uses_everything() {
        let m = pack(b"HelloW");
        assert_eq!(m, BigUint::from_be_bytes(b"HelloW"));
    }

    #[test]
    fn unpack_restores_original_block() {
        let original = b"Hi\0\0\0\0\0\0";
        let m = pack(original);
        let back = unpack(&m, original.len());
        assert_eq!(&back, original);
    }

    #[test]
    fn unpack_with_terminator_at_last_byte() {
        let mut original = [0u8; 32];
        original[..31].copy_from_slice(&[b'X'; 31]);
        // original[31] stays 0: a single null terminator as the last byte.
        let m = pack(&original);
        let back = unpack(&m, original.len());
        assert_eq!(&back[..], &original[..]);
    }

    #[test]
    fn block_size_matches_bits_over_sixteen() {
        assert_eq!(block_size_for_bits(512), 32);
        assert_eq!(block_size_for_bits(64), 4);
    }
}
