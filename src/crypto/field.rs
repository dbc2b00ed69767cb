//! Montgomery arithmetic modulo the 1536-bit group prime.

use crypto_bigint::modular::{MontyForm, MontyParams};
use crypto_bigint::{Odd, U1536};

/// Precomputed Montgomery parameters for a 1536-bit odd modulus.
pub(crate) type Params = MontyParams<{ U1536::LIMBS }>;

/// Builds Montgomery parameters for `modulus`, or `None` if it is even.
///
/// Setup is variable-time; the modulus is public.
pub(crate) fn params_for(modulus: &U1536) -> Option<Params> {
    let odd: Option<Odd<U1536>> = Odd::new(*modulus).into();
    odd.map(MontyParams::new_vartime)
}

/// Computes `base^exp` modulo the modulus behind `params`.
///
/// Constant-time in `base` and `exp`: the ladder always walks all 1536
/// exponent bits. `base` must already be reduced below the modulus.
pub(crate) fn pow(params: &Params, base: &U1536, exp: &U1536) -> U1536 {
    MontyForm::new(base, *params).pow(exp).retrieve()
}
