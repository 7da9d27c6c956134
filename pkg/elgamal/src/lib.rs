//! ElGamal public-key encryption over the `bignum` arithmetic engine:
//! key generation, per-block encrypt/decrypt, and the text formats the
//! `keygen`/`encrypt`/`decrypt` binaries read and write.
//!
//! Not constant-time, not side-channel resistant, not CCA-secure, and not
//! interoperable with any standard ElGamal wire format — see DESIGN.md.

pub mod block;
pub mod cipherfile;
pub mod codec;
mod error;
pub mod keyfile;
pub mod keys;

pub use error::{report_and_exit, Error, Field};

pub type Result<T> = std::result::Result<T, Error>;
