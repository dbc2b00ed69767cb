/// Montgomery arithmetic modulo the 1536-bit group prime.
pub(crate) mod field;
