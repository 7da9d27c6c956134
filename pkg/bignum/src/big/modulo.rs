use crate::big::uint::BigUint;
use crate::error::Error;
use crate::Result;

/// A set of operations which all result in a 'mod n' result.
///
/// Bundled behind a struct (rather than free functions taking `n` every
/// call) so callers doing several operations against the same modulus only
/// state it once, matching how the arithmetic kernel's other composite
/// operations are organized.
pub struct Modulo<'a> {
    pub n: &'a BigUint,
}

impl<'a> Modulo<'a> {
    pub fn new(n: &'a BigUint) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::ZeroModulus);
        }
        Ok(Modulo { n })
    }

    pub fn rem(&self, a: &BigUint) -> BigUint {
        a.rem(self.n).expect("modulus checked nonzero at construction")
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.rem(&(a + b))
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.rem(a);
        let b = self.rem(b);
        self.rem(&((a + self.n) - b))
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.rem(&(a * b))
    }

    /// Computes `a^b mod n` by square-and-multiply, walking the exponent's
    /// bits from least to most significant: `out` accumulates the product
    /// of `p = a^(2^i)` for each set bit `i`, and `p` is squared every
    /// round regardless of whether that bit was used.
    pub fn pow(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if self.n.is_one() {
            return BigUint::zero();
        }
        if b.is_zero() {
            return BigUint::from_digit(1);
        }

        let mut out = BigUint::from_digit(1);
        let mut p = self.rem(a);
        for i in 0..b.bit_len() {
            if b.bit(i) == 1 {
                out = self.mul(&out, &p);
            }
            p = self.mul(&p, &p);
        }

        out
    }

    /// Computes the modular inverse `a^-1` such that `a * a^-1 = 1 mod n`,
    /// via the extended Euclidean algorithm run in terms of modular (rather
    /// than signed) arithmetic:
    /// <https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm#Modular_integers>
    ///
    /// Returns `None` if `a` has no inverse mod `n` (they share a common
    /// factor). The ElGamal layer does not use this — it inverts via
    /// Fermat's little theorem instead, since the modulus is prime — but it
    /// is kept as a general-purpose piece of the modular arithmetic toolkit.
    pub fn inv(&self, a: &BigUint) -> Option<BigUint> {
        let mut t = BigUint::zero();
        let mut new_t = BigUint::from_digit(1);
        let mut r = self.n.clone();
        let mut new_r = self.rem(a);

        while !new_r.is_zero() {
            let (q, rem) = r.divmod(&new_r).expect("new_r != 0 checked by loop condition");
            let next_t = self.sub(&t, &self.mul(&q, &new_t));
            t = new_t;
            new_t = next_t;
            r = new_r;
            new_r = rem;
        }

        if r > BigUint::from_digit(1) {
            return None;
        }

        Some(t)
    }

    /// Computes `(a / b) mod n` as `a * b^-1 mod n`.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Option<BigUint> {
        self.inv(b).map(|b_inv| self.mul(a, &b_inv))
    }

    pub fn negate(&self, a: &BigUint) -> BigUint {
        self.sub(self.n, a)
    }
}

/// Computes `base^exp mod modulus` directly, for callers that only need one
/// exponentiation and would rather not construct a [`Modulo`].
pub fn modexp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    Ok(Modulo::new(modulus)?.pow(base, exp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_and_division() {
        let p = BigUint::from_digit(7);
        let m = Modulo::new(&p).unwrap();
        let x = m.inv(&BigUint::from_digit(2)).unwrap();
        assert_eq!(x, BigUint::from_digit(4));
        assert_eq!(
            m.div(&BigUint::from_digit(1), &BigUint::from_digit(2)).unwrap(),
            BigUint::from_digit(4)
        );
    }

    #[test]
    fn zero_modulus_is_rejected() {
        assert!(matches!(Modulo::new(&BigUint::zero()), Err(Error::ZeroModulus)));
    }

    #[test]
    fn pow_matches_fermats_little_theorem() {
        // 5^(19-1) mod 19 == 1 for any a coprime to the prime 19.
        let p = BigUint::from_digit(19);
        let m = Modulo::new(&p).unwrap();
        let r = m.pow(&BigUint::from_digit(5), &BigUint::from_digit(18));
        assert_eq!(r, BigUint::from_digit(1));
    }

    #[test]
    fn pow_small_examples() {
        assert_eq!(
            modexp(&BigUint::from_digit(2), &BigUint::from_digit(10), &BigUint::from_digit(1000))
                .unwrap(),
            BigUint::from_digit(24)
        );
        assert_eq!(
            modexp(&BigUint::from_digit(5), &BigUint::from_digit(117), &BigUint::from_digit(19))
                .unwrap(),
            BigUint::from_digit(1)
        );
    }

    #[test]
    fn pow_modulus_one_is_always_zero() {
        assert_eq!(
            modexp(&BigUint::from_digit(123), &BigUint::from_digit(456), &BigUint::from_digit(1))
                .unwrap(),
            BigUint::zero()
        );
    }

    #[test]
    fn pow_zero_exponent_and_modulus_one_is_zero_not_one() {
        assert_eq!(
            modexp(&BigUint::from_digit(7), &BigUint::zero(), &BigUint::from_digit(1)).unwrap(),
            BigUint::zero()
        );
    }
}
