/// RFC 3526 1536-bit MODP group (group 5).
pub mod modp1536;

pub use modp1536::{GroupParams, GROUP_BITS, GROUP_BYTES, MODP_1536};
