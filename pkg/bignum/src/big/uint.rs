use std::cmp::Ordering;

use auto_ops::{impl_op_ex, impl_op_ex_commutative};

use crate::error::Error;
use crate::Result;

/// An arbitrary-precision nonnegative integer.
///
/// Stored as little-endian base-2^64 digits (`digits[0]` is least
/// significant). Canonical form has no trailing zero digit; zero is the
/// empty digit sequence. Every method that can leave trailing zeros calls
/// [`BigUint::trim`] before returning.
///
/// This type is not constant-time: comparisons, shifts, and division all
/// branch on digit values. It is meant for demonstration-scale
/// cryptographic arithmetic, not for code that must resist timing attacks.
#[derive(Clone, Default)]
pub struct BigUint {
    digits: Vec<u64>,
}

impl BigUint {
    /// The value zero, represented with no digits.
    pub fn zero() -> Self {
        Self { digits: vec![] }
    }

    /// A single nonzero digit, `v * 2^(64*0)`.
    pub fn from_digit(v: u64) -> Self {
        let mut out = Self {
            digits: if v == 0 { vec![] } else { vec![v] },
        };
        out.trim();
        out
    }

    /// `2^bit`.
    pub fn one_shifted(bit: u32) -> Self {
        let mut out = Self::zero();
        out.set_bit(bit as usize, 1);
        out
    }

    /// Builds a value directly from little-endian digits, without
    /// requiring the caller to pre-trim trailing zeros. Used by the random
    /// sampling routines, which generate a fixed digit count that may have
    /// high zero digits.
    pub fn from_digits(digits: Vec<u64>) -> Self {
        let mut out = Self { digits };
        out.trim();
        out
    }

    /// Re-trims trailing zero digits. Exposed for callers (outside this
    /// module) that build a `BigUint` through a path that can't maintain
    /// canonical form on its own, such as [`BigUint::from_digits`] callers
    /// that mutate the vector afterwards.
    pub fn canonicalize(&mut self) {
        self.trim();
    }

    /// The most significant digit, i.e. `digits[digit_count() - 1]`. Zero
    /// for the value zero.
    pub fn top_digit(&self) -> u64 {
        self.digits.last().copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }

    pub fn is_even(&self) -> bool {
        self.digit(0) & 1 == 0
    }

    /// Number of base-2^64 digits in the canonical representation.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Minimum number of bits required to represent the current value.
    /// Zero for the value zero.
    pub fn bit_len(&self) -> usize {
        match self.digits.last() {
            None => 0,
            Some(top) => 64 * (self.digits.len() - 1) + (64 - top.leading_zeros() as usize),
        }
    }

    /// `⌊log2 self⌋`. Only meaningful for nonzero values; used internally as
    /// a sizing heuristic for division. Panics on zero (spec.md leaves this
    /// case as an undefined sentinel; we make the precondition explicit
    /// instead of returning a value that looks meaningful but isn't).
    fn ilog2(&self) -> usize {
        assert!(!self.is_zero(), "ilog2 of zero is undefined");
        self.bit_len() - 1
    }

    fn digit(&self, i: usize) -> u64 {
        self.digits.get(i).copied().unwrap_or(0)
    }

    fn digit_mut(&mut self, i: usize) -> &mut u64 {
        if self.digits.len() <= i {
            self.digits.resize(i + 1, 0);
        }
        &mut self.digits[i]
    }

    fn trim(&mut self) {
        while let Some(0) = self.digits.last() {
            self.digits.pop();
        }
    }

    pub fn bit(&self, i: usize) -> u64 {
        (self.digit(i / 64) >> (i % 64)) & 1
    }

    pub fn set_bit(&mut self, i: usize, v: u64) {
        debug_assert!(v == 0 || v == 1);
        let word = i / 64;
        let shift = i % 64;
        let mask = !(1u64 << shift);
        *self.digit_mut(word) = (self.digit(word) & mask) | (v << shift);
        self.trim();
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.digits.len() * 8);
        for d in self.digits.iter().rev() {
            out.extend_from_slice(&d.to_be_bytes());
        }
        out
    }

    /// Big-endian bytes with leading zero bytes stripped (empty for zero).
    /// `to_be_bytes` is digit-aligned and can carry a spurious leading zero
    /// byte from the top digit's own padding; this strips that artifact so
    /// the result is the minimal byte-length representation of the value.
    pub fn to_minimal_be_bytes(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        match bytes.iter().position(|&b| b != 0) {
            Some(i) => bytes[i..].to_vec(),
            None => Vec::new(),
        }
    }

    pub fn from_be_bytes(data: &[u8]) -> Self {
        let mut digits = Vec::with_capacity((data.len() + 7) / 8);
        let rem = data.len() % 8;

        let mut idx = data.len();
        while idx >= 8 {
            digits.push(u64::from_be_bytes(*array_ref![data, idx - 8, 8]));
            idx -= 8;
        }
        if rem != 0 {
            let mut rest = [0u8; 8];
            rest[(8 - rem)..].copy_from_slice(&data[0..rem]);
            digits.push(u64::from_be_bytes(rest));
        }

        let mut out = Self { digits };
        out.trim();
        out
    }

    /// self += rhs
    pub fn add_assign(&mut self, rhs: &BigUint) {
        let mut carry = 0u128;
        let n = self.digits.len().max(rhs.digits.len());
        for i in 0..n {
            let v = self.digit(i) as u128 + rhs.digit(i) as u128 + carry;
            *self.digit_mut(i) = v as u64;
            carry = v >> 64;
        }
        if carry != 0 {
            self.digits.push(carry as u64);
        }
        self.trim();
    }

    /// self -= rhs. Precondition: self >= rhs.
    pub fn sub_assign(&mut self, rhs: &BigUint) -> Result<()> {
        if (&*self) < rhs {
            return Err(Error::Underflow);
        }
        let mut borrow = 0i128;
        let n = self.digits.len().max(rhs.digits.len());
        for i in 0..n {
            let v = self.digit(i) as i128 - rhs.digit(i) as i128 - borrow;
            if v < 0 {
                *self.digit_mut(i) = (v + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                *self.digit_mut(i) = v as u64;
                borrow = 0;
            }
        }
        debug_assert_eq!(borrow, 0);
        self.trim();
        Ok(())
    }

    /// self <<= n
    pub fn shl_assign(&mut self, n: u32) {
        let whole = (n / 64) as usize;
        let sub = n % 64;

        if whole > 0 {
            self.digits.splice(0..0, std::iter::repeat(0u64).take(whole));
        }

        if sub > 0 {
            let mut carry = 0u64;
            for i in whole..self.digits.len() {
                let v = self.digits[i];
                self.digits[i] = (v << sub) | carry;
                carry = v >> (64 - sub);
            }
            if carry != 0 {
                self.digits.push(carry);
            }
        }

        self.trim();
    }

    /// self >>= n
    pub fn shr_assign(&mut self, n: u32) {
        let whole = (n / 64) as usize;
        let sub = n % 64;

        if whole >= self.digits.len() {
            self.digits.clear();
            return;
        }
        if whole > 0 {
            self.digits.drain(0..whole);
        }

        if sub > 0 {
            let len = self.digits.len();
            for i in 0..len {
                let lo = self.digits[i] >> sub;
                let hi = if i + 1 < len {
                    self.digits[i + 1] << (64 - sub)
                } else {
                    0
                };
                self.digits[i] = lo | hi;
            }
        }

        self.trim();
    }

    /// self *= s for a single 64-bit scalar.
    pub fn scale_assign(&mut self, s: u64) {
        let mut carry = 0u128;
        for d in self.digits.iter_mut() {
            let v = (*d as u128) * (s as u128) + carry;
            *d = v as u64;
            carry = v >> 64;
        }
        while carry != 0 {
            self.digits.push(carry as u64);
            carry >>= 64;
        }
        self.trim();
    }

    pub fn increment(&mut self) {
        self.add_assign(&BigUint::from_digit(1));
    }

    pub fn decrement(&mut self) -> Result<()> {
        self.sub_assign(&BigUint::from_digit(1))
    }

    /// Out-of-place schoolbook multiply. O(|self|*|rhs|) digit multiplies.
    pub fn mul(&self, rhs: &BigUint) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }

        let mut out = vec![0u64; self.digits.len() + rhs.digits.len()];
        for (i, &a) in self.digits.iter().enumerate() {
            let mut carry = 0u128;
            for (j, &b) in rhs.digits.iter().enumerate() {
                let v = (a as u128) * (b as u128) + out[i + j] as u128 + carry;
                out[i + j] = v as u64;
                carry = v >> 64;
            }
            out[i + rhs.digits.len()] = carry as u64;
        }

        let mut out = BigUint { digits: out };
        out.trim();
        out
    }

    /// Euclidean division, returning `(quotient, remainder)`.
    ///
    /// Implemented as bit-at-a-time long division: the divisor is shifted
    /// left past the dividend's bit length plus a small safety margin, then
    /// walked back down one bit at a time, subtracting whenever it still
    /// fits. This avoids a multi-digit Knuth-D division at the cost of
    /// O(bit_len) subtract/compare passes, which is acceptable here because
    /// modular exponentiation dominates runtime at cryptographic sizes (see
    /// DESIGN.md).
    pub fn divmod(&self, rhs: &BigUint) -> Result<(BigUint, BigUint)> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        if rhs.is_one() {
            return Ok((self.clone(), BigUint::zero()));
        }
        if self < rhs {
            return Ok((BigUint::zero(), self.clone()));
        }

        let e = self.ilog2() - rhs.ilog2() + 2;

        let mut working = rhs.clone();
        working.shl_assign(e as u32);

        let mut remainder = self.clone();
        let mut quotient = BigUint::zero();

        for i in (0..e).rev() {
            working.shr_assign(1);
            if remainder >= working {
                remainder
                    .sub_assign(&working)
                    .expect("remainder >= working was just checked");
                quotient.set_bit(i, 1);
            }
        }

        quotient.trim();
        remainder.trim();
        Ok((quotient, remainder))
    }

    pub fn div(&self, rhs: &BigUint) -> Result<BigUint> {
        Ok(self.divmod(rhs)?.0)
    }

    pub fn rem(&self, rhs: &BigUint) -> Result<BigUint> {
        Ok(self.divmod(rhs)?.1)
    }
}

impl std::fmt::Debug for BigUint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigUint({})", crate::big::codec::to_hex(self))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Assumes both operands are canonical (no trailing zero digit).
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {
                for i in (0..self.digits.len()).rev() {
                    match self.digits[i].cmp(&other.digits[i]) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigUint {}

impl From<u64> for BigUint {
    fn from(v: u64) -> Self {
        BigUint::from_digit(v)
    }
}

impl From<u32> for BigUint {
    fn from(v: u32) -> Self {
        BigUint::from_digit(v as u64)
    }
}

impl_op_ex_commutative!(+ |a: &BigUint, b: &BigUint| -> BigUint {
    let mut out = a.clone();
    out.add_assign(b);
    out
});

impl_op_ex!(+= |a: &mut BigUint, b: &BigUint| { a.add_assign(b) });

impl_op_ex!(-|a: &BigUint, b: &BigUint| -> BigUint {
    let mut out = a.clone();
    out.sub_assign(b).expect("BigUint subtraction underflow");
    out
});

impl_op_ex!(-= |a: &mut BigUint, b: &BigUint| {
    a.sub_assign(b).expect("BigUint subtraction underflow");
});

impl_op_ex_commutative!(*|a: &BigUint, b: &BigUint| -> BigUint { a.mul(b) });

impl_op_ex!(/ |a: &BigUint, b: &BigUint| -> BigUint { a.div(b).expect("BigUint division by zero") });

impl_op_ex!(% |a: &BigUint, b: &BigUint| -> BigUint { a.rem(b).expect("BigUint division by zero") });

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> BigUint {
        crate::big::codec::from_hex(s).unwrap()
    }

    #[test]
    fn add_sub_roundtrip() {
        let x = from_hex("DEADBEEFCAFEBABE1234567890ABCDEF");
        let y = from_hex("1122334455667788");
        let sum = &x + &y;
        let back = &sum - &y;
        assert_eq!(back, x);
    }

    #[test]
    fn canonical_zero_has_no_digits() {
        let mut x = BigUint::from_digit(5);
        x.sub_assign(&BigUint::from_digit(5)).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.digit_count(), 0);
    }

    #[test]
    fn mul_by_zero_and_one() {
        let x = from_hex("123456789ABCDEF0123456789ABCDEF0");
        assert!(x.mul(&BigUint::zero()).is_zero());
        assert_eq!(x.mul(&BigUint::from_digit(1)), x);
    }

    #[test]
    fn shift_identities() {
        let x = from_hex("ABCDEF0123456789");
        let mut y = x.clone();
        y.shl_assign(0);
        assert_eq!(y, x);

        let mut z = x.clone();
        z.shr_assign(0);
        assert_eq!(z, x);

        let mut w = x.clone();
        w.shr_assign((x.bit_len() + 5) as u32);
        assert!(w.is_zero());
    }

    #[test]
    fn shift_left_then_right_identity() {
        let x = from_hex("FEDCBA9876543210FEDCBA9876543210");
        for n in [0u32, 1, 63, 64, 65, 130] {
            let mut y = x.clone();
            y.shl_assign(n);
            y.shr_assign(n);
            assert_eq!(y, x, "shift amount {}", n);
        }
    }

    #[test]
    fn divmod_invariant() {
        let x = from_hex("FFEEDDCCBBAA99887766554433221100");
        let y = from_hex("123456789ABCDEF0");
        let (q, r) = x.divmod(&y).unwrap();
        assert!(r < y);
        assert_eq!(q.mul(&y) + &r, x);
    }

    #[test]
    fn divmod_small_examples() {
        let (q, r) = BigUint::from_digit(100).divmod(&BigUint::from_digit(7)).unwrap();
        assert_eq!(q, BigUint::from_digit(14));
        assert_eq!(r, BigUint::from_digit(2));

        let (q, r) = BigUint::from_digit(7).divmod(&BigUint::from_digit(100)).unwrap();
        assert_eq!(q, BigUint::from_digit(0));
        assert_eq!(r, BigUint::from_digit(7));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert!(matches!(
            BigUint::from_digit(5).divmod(&BigUint::zero()),
            Err(Error::DivideByZero)
        ));
    }

    #[test]
    fn subtract_underflow_is_an_error() {
        assert!(matches!(
            BigUint::from_digit(1).sub_assign(&BigUint::from_digit(2)),
            Err(Error::Underflow)
        ));
    }

    #[test]
    fn compare_orders_by_digit_count_then_value() {
        assert!(BigUint::from_digit(5) < BigUint::from_digit(6));
        assert!(from_hex("1FFFFFFFFFFFFFFFF") > from_hex("FFFFFFFFFFFFFFFF"));
    }

    #[test]
    fn be_bytes_roundtrip() {
        let bytes = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04];
        let x = BigUint::from_be_bytes(&bytes);
        assert_eq!(x.to_be_bytes(), bytes);
    }

    #[test]
    fn minimal_be_bytes_drops_digit_alignment_padding() {
        let bytes = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03];
        let x = BigUint::from_be_bytes(&bytes);
        assert_eq!(x.to_minimal_be_bytes(), bytes);
    }
}
