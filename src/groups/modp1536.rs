use std::sync::OnceLock;

use crypto_bigint::{Encoding, U1536};
use subtle::ConstantTimeEq;

use crate::crypto::field::{self, Params};
use crate::{Error, Result};

/// Byte length of the modulus, of every public key and of every shared secret.
pub const GROUP_BYTES: usize = 192;

/// Bit length of the modulus.
pub const GROUP_BITS: u32 = 1536;

/// RFC 3526 group 5 prime: `2^1536 - 2^1472 - 1 + 2^64 * ([2^1406 pi] + 741804)`.
const MODULUS: U1536 = U1536::from_be_hex(concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74",
    "020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437",
    "4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05",
    "98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB",
    "9ED529077096966D670C354E4ABC9804F1746C08CA237327FFFFFFFFFFFFFFFF",
));

/// `(p - 1) / 2`, the prime order of the quadratic-residue subgroup.
const ORDER: U1536 = U1536::from_be_hex(concat!(
    "7FFFFFFFFFFFFFFFE487ED5110B4611A62633145C06E0E68948127044533E63A",
    "0105DF531D89CD9128A5043CC71A026EF7CA8CD9E69D218D98158536F92F8A1B",
    "A7F09AB6B6A8E122F242DABB312F3F637A262174D31BF6B585FFAE5B7A035BF6",
    "F71C35FDAD44CFD2D74F9208BE258FF324943328F6722D9EE1003E5C50B1DF82",
    "CC6D241B0E2AE9CD348B1FD47E9267AFC1B2AE91EE51D6CB0E3179AB1042A95D",
    "CF6A9483B84B4B36B3861AA7255E4C0278BA36046511B993FFFFFFFFFFFFFFFF",
));

const GENERATOR: U1536 = U1536::from_u8(2);

/// The fixed UniformDH group shared by every context in the process.
pub static MODP_1536: GroupParams = GroupParams {
    name: "RFC3526-MODP-1536",
    p: MODULUS,
    q: ORDER,
    g: GENERATOR,
    monty: OnceLock::new(),
};

/// Parameters of a safe-prime MODP group.
///
/// Values are immutable after construction; contexts hold them by `&'static`
/// reference, so concurrent reads need no synchronization. Montgomery
/// parameters for `p` are computed on first use and shared afterwards.
#[derive(Clone, Debug)]
pub struct GroupParams {
    name: &'static str,
    p: U1536,
    q: U1536,
    g: U1536,
    monty: OnceLock<Option<Params>>,
}

impl GroupParams {
    /// Returns the name of this group.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the modulus `p`.
    pub fn modulus(&self) -> &U1536 {
        &self.p
    }

    /// Returns the generator `g`.
    pub fn generator(&self) -> &U1536 {
        &self.g
    }

    /// Checks that the parameters describe a usable group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if:
    /// - `p` is not exactly [`GROUP_BITS`] bits long
    /// - `p` is not odd, or `q` is not `(p - 1) / 2`
    /// - `g` is not in `[2, p - 1)`
    pub(crate) fn validate(&self) -> Result<()> {
        if self.p.bits() != GROUP_BITS {
            return Err(Error::InvalidParams(format!(
                "modulus must be {} bits, got {}",
                GROUP_BITS,
                self.p.bits()
            )));
        }

        let p_minus_one = self.p.wrapping_sub(&U1536::ONE);
        if self.q.wrapping_add(&self.q) != p_minus_one {
            return Err(Error::InvalidParams("order must equal (p - 1) / 2".to_string()));
        }

        if self.g < U1536::from_u8(2) || self.g >= p_minus_one {
            return Err(Error::InvalidParams("generator must be in [2, p - 1)".to_string()));
        }

        self.monty()?;
        Ok(())
    }

    fn monty(&self) -> Result<&Params> {
        self.monty
            .get_or_init(|| field::params_for(&self.p))
            .as_ref()
            .ok_or_else(|| {
                Error::InvalidParams("modulus must be odd for Montgomery form".to_string())
            })
    }

    /// Computes `base^exponent mod p`. `base` must be below `p`.
    pub fn pow(&self, base: &U1536, exponent: &U1536) -> Result<U1536> {
        Ok(field::pow(self.monty()?, base, exponent))
    }

    /// Computes `g^exponent mod p`.
    pub fn pow_generator(&self, exponent: &U1536) -> Result<U1536> {
        self.pow(&self.g, exponent)
    }

    /// Returns `p - value`, the representative of `-value` in `[0, p]`.
    pub fn reflect(&self, value: &U1536) -> U1536 {
        self.p.wrapping_sub(value)
    }

    /// Returns `true` if `value` is a quadratic residue modulo `p`.
    ///
    /// Raw DH values `g^x` always are; reflected values never are.
    pub fn is_quadratic_residue(&self, value: &U1536) -> Result<bool> {
        let symbol = self.pow(value, &self.q)?;
        Ok(bool::from(symbol.ct_eq(&U1536::ONE)))
    }

    /// Decodes a peer's public value and applies the acceptance policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPublicKey`] if the value is `0`, `1`, `p - 1`
    /// or not below `p`. Those values give the same shared secret (0 or 1)
    /// for every even exponent.
    pub fn decode_element(&self, bytes: &[u8; GROUP_BYTES]) -> Result<U1536> {
        let value = U1536::from_be_slice(bytes);

        if value >= self.p {
            return Err(Error::InvalidPublicKey(
                "value must be less than the modulus".to_string(),
            ));
        }

        if value == U1536::ZERO {
            return Err(Error::InvalidPublicKey("value is zero".to_string()));
        }

        if value == U1536::ONE || value == self.p.wrapping_sub(&U1536::ONE) {
            return Err(Error::InvalidPublicKey(
                "value generates a subgroup of order at most 2".to_string(),
            ));
        }

        Ok(value)
    }

    /// Encodes `value` as exactly [`GROUP_BYTES`] big-endian bytes,
    /// left-padded with zeros.
    pub fn encode_element(&self, value: &U1536) -> [u8; GROUP_BYTES] {
        let mut out = [0u8; GROUP_BYTES];
        out.copy_from_slice(value.to_be_bytes().as_ref());
        out
    }
}
