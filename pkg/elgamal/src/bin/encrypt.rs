//! `encrypt <pub.key> <ciphertext.out>` — read plaintext blocks from
//! standard input, emit ciphertext blocks to a file.

use std::io::Read;
use std::path::Path;

use elgamal::{block, cipherfile, keyfile, keys, report_and_exit, Error};

fn read_block(stdin: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = stdin.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        return Err(Error::Usage(format!(
            "usage: {} <pub.key> <ciphertext.out>",
            args.first().map(String::as_str).unwrap_or("encrypt")
        )));
    }

    let pub_path = Path::new(&args[1]);
    let out_path = Path::new(&args[2]);

    let pk = keyfile::read_public(pub_path)?;
    let block_size = block::block_size_for_bits(pk.bits);

    let mut stdin = std::io::stdin().lock();
    let mut buf = vec![0u8; block_size];
    let mut blocks = Vec::new();

    loop {
        let n = read_block(&mut stdin, &mut buf)?;
        if n == 0 {
            break;
        }
        if n < block_size {
            for b in &mut buf[n..] {
                *b = 0;
            }
        }

        let m = block::pack(&buf);
        blocks.push(keys::encrypt_block(&pk, &m)?);

        if n < block_size {
            break;
        }
    }

    cipherfile::write_blocks(out_path, &blocks)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        report_and_exit(e);
    }
}
