//! The plain-text key-file format (spec.md §6):
//!
//! ```text
//! Private Key (<bits> bits)
//!
//! PrimeModulus:   <hex p>
//!
//! Generator:      <hex g>
//!
//! Exponent:       <hex x>
//! ```
//!
//! A public key file is identical but for the header and the use of
//! `Exponential:` in place of `Exponent:`.

use std::path::Path;

use crate::codec;
use crate::error::{Error, Field};
use crate::keys::{PrivateKey, PublicKey};

fn field(contents: &str, label: &str, field: Field) -> Result<bignum::BigUint, Error> {
    for line in contents.lines() {
        if let Some(rest) = line.trim_start().strip_prefix(label) {
            return codec::decode(rest.trim());
        }
    }
    Err(codec::missing(field))
}

/// Parses the `<bits>` out of the header line (`Private Key (<bits> bits)` /
/// `Public Key (<bits> bits)`), the way `original_source/encryptor.c` and
/// `decryptor.c` read `keySize` with `fscanf` rather than ever recomputing it
/// from the modulus.
fn header_bits(contents: &str) -> Result<u32, Error> {
    let first_line = contents.lines().next().unwrap_or("");
    let rest = first_line
        .split_once('(')
        .map(|(_, rest)| rest)
        .unwrap_or("");
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().map_err(|_| Error::Hex(first_line.to_string()))
}

pub fn write_private(path: &Path, bits: u32, key: &PrivateKey) -> Result<(), Error> {
    let contents = format!(
        "Private Key ({bits} bits)\n\nPrimeModulus:   {p}\n\nGenerator:      {g}\n\nExponent:       {x}\n",
        bits = bits,
        p = codec::encode(&key.p),
        g = codec::encode(&key.g),
        x = codec::encode(&key.x),
    );
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn write_public(path: &Path, bits: u32, key: &PublicKey) -> Result<(), Error> {
    let contents = format!(
        "Public Key ({bits} bits)\n\nPrimeModulus:   {p}\n\nGenerator:      {g}\n\nExponential:    {h}\n",
        bits = bits,
        p = codec::encode(&key.p),
        g = codec::encode(&key.g),
        h = codec::encode(&key.h),
    );
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn read_private(path: &Path) -> Result<PrivateKey, Error> {
    let contents = std::fs::read_to_string(path)?;
    let bits = header_bits(&contents)?;
    let p = field(&contents, "PrimeModulus:", Field::PrimeModulus)?;
    let g = field(&contents, "Generator:", Field::Generator)?;
    let x = field(&contents, "Exponent:", Field::Exponent)?;
    Ok(PrivateKey { bits, p, g, x })
}

pub fn read_public(path: &Path) -> Result<PublicKey, Error> {
    let contents = std::fs::read_to_string(path)?;
    let bits = header_bits(&contents)?;
    let p = field(&contents, "PrimeModulus:", Field::PrimeModulus)?;
    let g = field(&contents, "Generator:", Field::Generator)?;
    let h = field(&contents, "Exponential:", Field::Exponent)?;
    Ok(PublicKey { bits, p, g, h })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate;

    #[test]
    fn private_key_roundtrips_through_a_file() {
        let dir = test_dir("priv-roundtrip");
        let path = dir.join("priv.key");

        let pair = generate(64).unwrap();
        write_private(&path, 64, &pair.private).unwrap();
        let read_back = read_private(&path).unwrap();

        assert_eq!(read_back.bits, 64);
        assert_eq!(read_back.p, pair.private.p);
        assert_eq!(read_back.g, pair.private.g);
        assert_eq!(read_back.x, pair.private.x);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn public_key_roundtrips_through_a_file() {
        let dir = test_dir("pub-roundtrip");
        let path = dir.join("pub.key");

        let pair = generate(64).unwrap();
        write_public(&path, 64, &pair.public).unwrap();
        let read_back = read_public(&path).unwrap();

        assert_eq!(read_back.bits, 64);
        assert_eq!(read_back.p, pair.public.p);
        assert_eq!(read_back.g, pair.public.g);
        assert_eq!(read_back.h, pair.public.h);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_field_is_reported_precisely() {
        let dir = test_dir("missing-field");
        let path = dir.join("broken.key");
        std::fs::write(&path, "Private Key (64 bits)\n\nGenerator:      02\n\nExponent:       03\n").unwrap();

        let err = read_private(&path).unwrap_err();
        assert!(matches!(err, Error::MissingField(Field::PrimeModulus)));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn header_bits_is_the_literal_field_not_the_modulus_bit_length() {
        let dir = test_dir("header-bits-literal");
        let path = dir.join("priv.key");
        // p's bit_len() is 3 here, but the header says 511 — read_private
        // must trust the header, not recompute from p.
        std::fs::write(
            &path,
            "Private Key (511 bits)\n\nPrimeModulus:   07\n\nGenerator:      02\n\nExponent:       03\n",
        )
        .unwrap();

        let key = read_private(&path).unwrap();
        assert_eq!(key.bits, 511);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn nonexistent_file_is_an_io_error() {
        let err = read_private(Path::new("/nonexistent/path/does-not-exist.key")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    fn test_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("elgamal-test-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}
