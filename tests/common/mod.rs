//! Common test utilities shared across integration tests.

use num_bigint::BigUint;
use uniform_dh::{GROUP_BYTES, MODP_1536};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Shows the library's debug events through the test writer so they appear
/// only for failing tests. Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("uniform_dh=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// The group modulus as a `num-bigint` value, for independent cross-checks.
#[allow(dead_code)]
pub fn modulus() -> BigUint {
    BigUint::from_bytes_be(&MODP_1536.encode_element(MODP_1536.modulus()))
}

/// Left-pads a `num-bigint` value to the wire width.
#[allow(dead_code)]
pub fn encode(value: &BigUint) -> [u8; GROUP_BYTES] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; GROUP_BYTES];
    out[GROUP_BYTES - bytes.len()..].copy_from_slice(&bytes);
    out
}
