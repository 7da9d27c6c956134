/// Which labeled key-file field was missing, used to pick the exit code
/// `main` reports (spec.md §6: one code per missing field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PrimeModulus,
    Generator,
    /// `Exponent:` in a private key file, `Exponential:` in a public one.
    Exponent,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("key file is missing the {0:?} field")]
    MissingField(Field),

    #[error("unparseable hex value: {0:?}")]
    Hex(String),

    /// A lower-layer precondition violation (or OS entropy failure)
    /// leaking up from `bignum`. Per spec.md §7 these are fatal: `main`
    /// reports them and aborts rather than mapping them into the 1-6
    /// exit-code band, which is reserved for the CLI-recoverable cases
    /// above.
    #[error(transparent)]
    Bignum(#[from] bignum::Error),
}

/// Reports `e` to stderr and exits with the code spec.md §6/§7 assigns to
/// its category. Shared by all three binaries so the exit-code contract
/// lives in exactly one place.
pub fn report_and_exit(e: Error) -> ! {
    eprintln!("{}: {}", env!("CARGO_PKG_NAME"), e);
    let code = match &e {
        Error::Usage(_) => 1,
        Error::Io(_) => 2,
        Error::MissingField(Field::PrimeModulus) => 3,
        Error::MissingField(Field::Generator) => 4,
        Error::MissingField(Field::Exponent) => 5,
        Error::Hex(_) => 6,
        // ProgrammerError / EntropyError: fatal, outside the 1-6 band.
        Error::Bignum(_) => 70,
    };
    std::process::exit(code);
}
