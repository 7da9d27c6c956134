//! Miller-Rabin primality testing, prime generation, and primitive root
//! search — grounded on `original_source/intChain.c`'s `intIsPrime`,
//! `intMakePrime`, and `intFindPrimitiveRoot`.

use crate::big::modulo::Modulo;
use crate::big::random::{PseudoRandom, SecureRandom};
use crate::big::uint::BigUint;
use crate::error::Error;
use crate::Result;

const MILLER_RABIN_ROUNDS: usize = 50;

/// Miller-Rabin probabilistic primality test, 50 rounds.
///
/// `x` must be at least 3 — the caller is expected to have already ruled
/// out 0, 1, and 2 (which Miller-Rabin's `x - 2` witness range can't
/// express), same as the original.
///
/// A subtlety preserved deliberately from the reference algorithm: once a
/// round has seen `w` take some value other than 1 or `x-1`, a *later*
/// squaring that lands back on 1 must be treated as proof of
/// compositeness (a nontrivial square root of 1 was found), not silently
/// ignored. An implementation that keeps squaring past that point without
/// checking for it will certify composite numbers as prime.
pub fn is_prime(x: &BigUint, rng: &mut PseudoRandom) -> Result<bool> {
    if x < &BigUint::from_digit(3) {
        return Err(Error::NotPrimeCandidate);
    }
    if x.is_even() {
        return Ok(false);
    }

    let x_minus_one = x - &BigUint::from_digit(1);
    let x_minus_two = x - &BigUint::from_digit(2);

    // x - 1 = 2^s * d, d odd.
    let mut d = x_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d.shr_assign(1);
        s += 1;
    }

    let m = Modulo::new(x)?;

    'rounds: for _ in 0..MILLER_RABIN_ROUNDS {
        // Sampled directly from [0, x-2), matching intIsPrime's use of
        // intPseudoRandom(XMinusTwo) as the witness range rather than the
        // inclusive [2, x-2] a textbook statement of the test would use;
        // the boundary values this can additionally select (0, 1) are
        // harmless since both immediately satisfy w == 1 below.
        let a = rng.below(&x_minus_two);

        let mut w = m.pow(&a, &d);

        if w.is_one() || w == x_minus_one {
            continue 'rounds;
        }

        let mut saw_non_trivial_root = false;
        for _ in 1..s {
            w = m.mul(&w, &w);
            if w == x_minus_one {
                continue 'rounds;
            }
            if w.is_one() {
                saw_non_trivial_root = true;
                break;
            }
        }

        // Either the inner loop ran out (w never returned to x-1), or it
        // found w == 1 after already having left {1, x-1} — both certify
        // x composite.
        let _ = saw_non_trivial_root;
        return Ok(false);
    }

    Ok(true)
}

/// Generates a prime `p` with `2^bits <= p < 2^(bits+1)`.
///
/// Alternates between a cheap local search (advance the current candidate
/// by doubling and setting the low bit, i.e. `2c+1`, wrapping modulo
/// `2^(bits+1)`) and resampling a fresh secure random odd candidate,
/// matching `intMakePrime`'s two-phase search rather than resampling from
/// the OS on every failed attempt.
pub fn generate_prime(bits: u32) -> Result<BigUint> {
    let lower = BigUint::one_shifted(bits);
    let upper = BigUint::one_shifted(bits + 1);

    let mut rng = PseudoRandom::new();

    let mut candidate = SecureRandom::below(&lower)?;
    candidate.shl_assign(1);
    candidate.set_bit(0, 1);

    let mut advance_locally = true;

    loop {
        if candidate >= lower && candidate < upper && is_prime(&candidate, &mut rng)? {
            return Ok(candidate);
        }

        if advance_locally {
            candidate.shl_assign(1);
            candidate.set_bit(0, 1);
            candidate = candidate.rem(&upper).expect("upper is a nonzero power of two");
        } else {
            candidate = SecureRandom::below(&lower)?;
            candidate.shl_assign(1);
            candidate.set_bit(0, 1);
        }
        advance_locally = !advance_locally;
    }
}

/// Finds a primitive root of `p` by repeated sampling and an order check.
///
/// This only verifies `g^(p-1) = 1 mod p` (group membership, guaranteed for
/// any `g` coprime to `p` by Fermat's little theorem whether or not `g`
/// actually generates the full group). It does not verify that `g`'s
/// multiplicative order is exactly `p-1`, which would require factoring
/// `p-1`. `original_source/intChain.c`'s `intFindPrimitiveRoot` has the
/// same weakening; this crate preserves it rather than silently
/// "upgrading" the algorithm's guarantee.
pub fn find_primitive_root(p: &BigUint) -> Result<BigUint> {
    let phi = p - &BigUint::from_digit(1);
    let m = Modulo::new(p)?;
    let one = BigUint::from_digit(1);

    let mut g = SecureRandom::below(&phi)?;
    let mut w = m.pow(&g, &phi);

    while w != one {
        g = SecureRandom::below(p)?;
        w = m.pow(&g, &phi);
    }

    Ok(g)
}
