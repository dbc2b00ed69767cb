#![no_main]

use libfuzzer_sys::fuzz_target;
use uniform_dh::{UniformDh, GROUP_BYTES};

fuzz_target!(|data: &[u8]| {
    let mut context = match UniformDh::new() {
        Ok(context) => context,
        Err(_) => return,
    };

    if let Ok(secret) = context.shared_secret_from_bytes(data) {
        assert_eq!(data.len(), GROUP_BYTES);
        assert_eq!(secret.as_bytes().len(), GROUP_BYTES);
    }
});
