//! ElGamal key generation, and per-block encryption/decryption.

use bignum::{modexp, BigUint, SecureRandom};

use crate::Result;

#[derive(Clone)]
pub struct PrivateKey {
    /// The key-size header field, e.g. the `511` in `Private Key (511 bits)`.
    /// Not necessarily `p.bit_len()` — `p` is `bits+1` bits by construction
    /// (see [`generate`]) — and it is this field, not the modulus's actual
    /// bit length, that determines the plaintext block size.
    pub bits: u32,
    pub p: BigUint,
    pub g: BigUint,
    pub x: BigUint,
}

#[derive(Clone)]
pub struct PublicKey {
    pub bits: u32,
    pub p: BigUint,
    pub g: BigUint,
    pub h: BigUint,
}

pub struct KeyPair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

/// Generates a key pair over a `bits`-bit prime modulus: a fresh prime `p`,
/// a primitive root `g` mod `p`, a secret exponent `x`, and the
/// corresponding public `h = g^x mod p`.
pub fn generate(bits: u32) -> Result<KeyPair> {
    let p = bignum::generate_prime(bits)?;
    let g = bignum::find_primitive_root(&p)?;
    let x = SecureRandom::below(&p)?;
    let h = modexp(&g, &x, &p)?;

    Ok(KeyPair {
        private: PrivateKey {
            bits,
            p: p.clone(),
            g: g.clone(),
            x,
        },
        public: PublicKey { bits, p, g, h },
    })
}

/// Encrypts one plaintext block `m < p` under `pk`, returning `(c1, c2)`.
pub fn encrypt_block(pk: &PublicKey, m: &BigUint) -> Result<(BigUint, BigUint)> {
    let k = SecureRandom::below(&pk.p)?;
    let c1 = modexp(&pk.g, &k, &pk.p)?;
    let shared = modexp(&pk.h, &k, &pk.p)?;
    let c2 = (m * &shared).rem(&pk.p)?;
    Ok((c1, c2))
}

/// Decrypts one ciphertext block `(c1, c2)` under `sk`, recovering `m`.
///
/// Inverts the shared secret `s = c1^x mod p` via Fermat's little theorem
/// (`s^-1 = s^(p-2) mod p`) rather than the extended Euclidean algorithm,
/// since `p` is prime and this avoids a second algorithm path purely to
/// invert one value.
pub fn decrypt_block(sk: &PrivateKey, c1: &BigUint, c2: &BigUint) -> Result<BigUint> {
    let s = modexp(c1, &sk.x, &sk.p)?;
    let p_minus_2 = &sk.p - &BigUint::from_digit(2);
    let s_inv = modexp(&s, &p_minus_2, &sk.p)?;
    Ok((c2 * &s_inv).rem(&sk.p)?)
}
