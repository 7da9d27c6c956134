//! Random sampling of `BigUint` values.
//!
//! Two distinct sources are kept deliberately separate, matching the split
//! in `original_source/intChain.c` between `intCryptoRandom` (backed by the
//! OS entropy pool) and `intPseudoRandom` (a fast, non-cryptographic
//! generator used only to pick Miller-Rabin witnesses, where unpredictable
//! bias would weaken the test but would not leak a secret). Conflating the
//! two would either make key generation depend on a non-cryptographic
//! source, or burn OS entropy on fifty throwaway witnesses per primality
//! check.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::big::uint::BigUint;
use crate::Result;

/// Samples using the OS's cryptographically secure random source
/// (`getrandom`). Used for anything that ends up in a key: primes,
/// exponents, primitive roots.
pub struct SecureRandom;

impl SecureRandom {
    /// `n` digits (`8*n` bytes) of uniform random data, as a `BigUint`.
    pub fn digits(n: usize) -> Result<BigUint> {
        let mut buf = vec![0u8; n * 8];
        getrandom::getrandom(&mut buf)?;

        let mut digits = Vec::with_capacity(n);
        for chunk in buf.chunks_exact(8) {
            digits.push(u64::from_le_bytes(chunk.try_into().unwrap()));
        }

        let mut out = BigUint::from_digits(digits);
        out.canonicalize();
        Ok(out)
    }

    /// A uniform random value in `[0, bound)`.
    ///
    /// Samples `bound`'s digit count worth of random digits, right-shifts
    /// away the bits above `bound`'s own bit width, and reduces modulo
    /// `bound`. The shift keeps the reduction's bias small (the sampled
    /// value is already within roughly 2x of `bound` before the `%`, rather
    /// than up to `2^64` times larger).
    pub fn below(bound: &BigUint) -> Result<BigUint> {
        assert!(!bound.is_zero(), "sampling below zero is not meaningful");

        let n = bound.digit_count();
        let mut x = Self::digits(n)?;

        let top = bound.top_digit();
        let shift = top.leading_zeros();
        x.shr_assign(shift);

        Ok(x.rem(bound).expect("bound checked nonzero above"))
    }
}

/// A small, fast, non-cryptographic generator seeded from the system clock.
///
/// Ported from the xorshift family rather than a full Mersenne Twister: the
/// only property this needs is "not obviously predictable to a casual
/// observer," since its output only ever selects which bases get tried as
/// Miller-Rabin witnesses, never anything secret.
pub struct PseudoRandom {
    state: u64,
}

impl PseudoRandom {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E3779B97F4A7C15);
        Self {
            state: seed | 1,
        }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// A pseudorandom value in `[0, bound)`. Resamples entirely if the
    /// value that would be returned comes back with fewer than 4 bits, per
    /// the restart rule `intPseudoRandom` applies to the reduced witness
    /// candidate (not to the raw draw, which is essentially never that
    /// small on its own).
    ///
    /// When `bound` itself is too small to ever produce a 4-bit value (i.e.
    /// `bound <= 15`), the restart check is skipped — every value it could
    /// ever return would fail it, which would otherwise spin forever (this
    /// only arises testing primality of single-digit candidates, never for
    /// cryptographic-sized moduli).
    pub fn below(&mut self, bound: &BigUint) -> BigUint {
        assert!(!bound.is_zero(), "sampling below zero is not meaningful");

        let skip_restart_check = bound.bit_len() < 4;

        loop {
            let n = bound.digit_count();
            let mut digits = Vec::with_capacity(n);
            for _ in 0..n {
                digits.push(self.next_u64());
            }
            let mut x = BigUint::from_digits(digits);
            x.canonicalize();

            let top = bound.top_digit();
            let shift = top.leading_zeros();
            x.shr_assign(shift);

            let reduced = x.rem(bound).expect("bound checked nonzero above");
            if !skip_restart_check && reduced.bit_len() < 4 {
                continue;
            }

            return reduced;
        }
    }
}

impl Default for PseudoRandom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_below_stays_in_range() {
        let bound = BigUint::from_digit(1000);
        for _ in 0..50 {
            let x = SecureRandom::below(&bound).unwrap();
            assert!(x < bound);
        }
    }

    #[test]
    fn pseudo_below_tiny_bound_terminates() {
        // bound = 1, as Miller-Rabin sees it testing a candidate of 3: every
        // value this can return (0) is below the 4-bit restart threshold,
        // so the check must not apply here or this call never returns.
        let mut rng = PseudoRandom::new();
        let x = rng.below(&BigUint::from_digit(1));
        assert_eq!(x, BigUint::zero());
    }

    #[test]
    fn pseudo_below_stays_in_range() {
        let bound = BigUint::from_digit(1000);
        let mut rng = PseudoRandom::new();
        for _ in 0..50 {
            let x = rng.below(&bound);
            assert!(x < bound);
        }
    }
}
