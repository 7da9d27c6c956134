/// Failure modes of the arithmetic layer.
///
/// The first four variants are all violated preconditions (what spec.md
/// calls `ProgrammerError`): a caller inside this workspace that sees one
/// has a bug and should treat it as fatal rather than recover from it. They
/// are modeled as `Err` rather than `panic!` so that the arithmetic kernel
/// itself stays testable (our own tests probe some of these boundaries
/// directly) and so a caller across a crate boundary still gets a typed
/// value instead of an unwind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("divide by zero")]
    DivideByZero,

    #[error("subtraction would underflow below zero")]
    Underflow,

    #[error("modulus must be nonzero")]
    ZeroModulus,

    #[error("Miller-Rabin requires a candidate >= 3")]
    NotPrimeCandidate,

    #[error("secure random source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),
}
