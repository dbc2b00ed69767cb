/// Key exchange context (key generation and secret derivation).
pub mod context;
/// Fixed-width public key and shared secret types.
pub mod keys;

pub use context::{Phase, UniformDh};
pub use keys::{PublicKey, SharedSecret};
