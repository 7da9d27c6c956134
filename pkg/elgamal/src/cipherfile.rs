//! The ciphertext-file format (spec.md §6): each block is two hex lines
//! followed by a blank line, blocks concatenated with no extra framing.

use std::io::Write;
use std::path::Path;

use bignum::BigUint;

use crate::codec;
use crate::error::Error;

pub fn write_blocks(path: &Path, blocks: &[(BigUint, BigUint)]) -> Result<(), Error> {
    let mut file = std::fs::File::create(path)?;
    for (c1, c2) in blocks {
        writeln!(file, "{}", codec::encode(c1))?;
        writeln!(file, "{}", codec::encode(c2))?;
        writeln!(file)?;
    }
    Ok(())
}

pub fn read_blocks(path: &Path) -> Result<Vec<(BigUint, BigUint)>, Error> {
    let contents = std::fs::read_to_string(path)?;
    let mut lines = contents.lines();
    let mut blocks = Vec::new();

    while let Some(c1_line) = lines.next() {
        if c1_line.trim().is_empty() {
            continue;
        }
        let c2_line = lines.next().unwrap_or("");
        let c1 = codec::decode(c1_line)?;
        let c2 = codec::decode(c2_line)?;
        blocks.push((c1, c2));
        // The blank separator line, if present, is consumed naturally by
        // the next iteration's `trim().is_empty()` skip.
    }

    Ok(blocks)
}
