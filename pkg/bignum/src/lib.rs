//! Arbitrary-precision unsigned integer arithmetic for cryptographic use.
//!
//! This crate is deliberately narrow: a `BigUint` with in-place add/
//! subtract/shift/scale, out-of-place multiply/divide, modular reduction and
//! exponentiation, and the random sampling / primality / primitive-root
//! routines a discrete-log cryptosystem needs to generate keys. It is not a
//! general-purpose numeric library and it is not constant-time: every
//! operation here branches and shifts on the value of its operands, which is
//! fine for demonstration-scale key sizes but not appropriate for production
//! use where side channels matter.

#[macro_use]
extern crate arrayref;

pub mod big;
mod error;

pub use big::{find_primitive_root, generate_prime, is_prime, modexp, BigUint, Modulo, PseudoRandom, SecureRandom};
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
