//! UniformDH key exchange.
//!
//! A Diffie-Hellman exchange over the RFC 3526 1536-bit MODP group whose
//! public keys are indistinguishable from uniformly random 192-byte strings,
//! as required by obfuscating transports such as obfs3.
//!
//! Each side draws a random 1536-bit number, clears its low bit to get an
//! even exponent `x`, and sends either `g^x mod p` or `p - g^x mod p`
//! depending on the bit it cleared. Since `x` is even the peer derives the
//! same secret from either representative.
//!
//! ```rust
//! use uniform_dh::UniformDh;
//!
//! let mut alice = UniformDh::new().unwrap();
//! let mut bob = UniformDh::new().unwrap();
//!
//! let alice_public = alice.public_key();
//! let bob_public = bob.public_key();
//!
//! let alice_secret = alice.shared_secret(&bob_public).unwrap();
//! let bob_secret = bob.shared_secret(&alice_public).unwrap();
//! assert_eq!(alice_secret.as_bytes(), bob_secret.as_bytes());
//! ```

mod crypto;
/// Error types.
pub mod error;
/// Group parameters.
pub mod groups;
/// The UniformDH exchange itself.
pub mod protocol;

pub use error::Error;
pub use groups::{GroupParams, GROUP_BITS, GROUP_BYTES, MODP_1536};
pub use protocol::{Phase, PublicKey, SharedSecret, UniformDh};

/// Result type for UniformDH operations.
pub type Result<T> = core::result::Result<T, Error>;
