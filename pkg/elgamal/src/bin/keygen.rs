//! `keygen <bits> <priv.key> <pub.key>` — generate a key pair and write
//! both files.

use std::path::Path;

use elgamal::{keyfile, keys, report_and_exit, Error};

fn run() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        return Err(Error::Usage(format!(
            "usage: {} <bits> <priv.key> <pub.key>",
            args.first().map(String::as_str).unwrap_or("keygen")
        )));
    }

    let bits: u32 = args[1]
        .parse()
        .map_err(|_| Error::Usage(format!("'{}' is not a valid bit count", args[1])))?;

    let priv_path = Path::new(&args[2]);
    let pub_path = Path::new(&args[3]);

    let pair = keys::generate(bits)?;
    keyfile::write_private(priv_path, bits, &pair.private)?;
    keyfile::write_public(pub_path, bits, &pair.public)?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        report_and_exit(e);
    }
}
