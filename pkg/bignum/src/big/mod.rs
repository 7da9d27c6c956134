pub mod codec;
mod modulo;
mod prime;
mod random;
mod uint;

pub use self::modulo::{modexp, Modulo};
pub use self::prime::{find_primitive_root, generate_prime, is_prime};
pub use self::random::{PseudoRandom, SecureRandom};
pub use self::uint::BigUint;
