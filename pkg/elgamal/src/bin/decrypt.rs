//! `decrypt <priv.key> <ciphertext.in>` — read ciphertext from a file, emit
//! plaintext to standard output.

use std::io::Write;
use std::path::Path;

use elgamal::{block, cipherfile, keyfile, keys, report_and_exit, Error};

fn run() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        return Err(Error::Usage(format!(
            "usage: {} <priv.key> <ciphertext.in>",
            args.first().map(String::as_str).unwrap_or("decrypt")
        )));
    }

    let priv_path = Path::new(&args[1]);
    let in_path = Path::new(&args[2]);

    let sk = keyfile::read_private(priv_path)?;
    let block_size = block::block_size_for_bits(sk.bits);

    let blocks = cipherfile::read_blocks(in_path)?;

    let mut stdout = std::io::stdout().lock();
    for (c1, c2) in &blocks {
        let m = keys::decrypt_block(&sk, c1, c2)?;
        let bytes = block::unpack(&m, block_size);
        stdout.write_all(&bytes)?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        report_and_exit(e);
    }
}
