#![no_main]

use libfuzzer_sys::fuzz_target;
use uniform_dh::{UniformDh, GROUP_BYTES};

fuzz_target!(|data: [u8; GROUP_BYTES]| {
    let context = UniformDh::from_secret_bytes(&data).expect("any draw should produce a context");
    assert_eq!(context.public_key().as_bytes().len(), GROUP_BYTES);
});
