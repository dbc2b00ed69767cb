//! Wire-format key types for UniformDH.
//!
//! Both types are exactly [`GROUP_BYTES`] big-endian bytes with no header,
//! version byte or length prefix. The fixed length is the whole format.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::groups::GROUP_BYTES;
use crate::{Error, Result};

/// A UniformDH public key as sent on the wire.
///
/// The bytes are the public value encoded big-endian and left-padded with
/// zeros. Their distribution is uniform over `[1, p)`, so the key carries
/// no recognizable structure. A `PublicKey` is only a container; range checks
/// happen when a context derives a secret from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; GROUP_BYTES]);

impl PublicKey {
    /// Wraps an encoded public value.
    pub const fn new(bytes: [u8; GROUP_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parses a public key received from a peer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bytes` is exactly
    /// [`GROUP_BYTES`] long. Short input is never padded and long input is
    /// never truncated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; GROUP_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: GROUP_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Returns the encoded bytes.
    pub fn as_bytes(&self) -> &[u8; GROUP_BYTES] {
        &self.0
    }

    /// Returns a copy of the encoded bytes.
    pub fn to_bytes(&self) -> [u8; GROUP_BYTES] {
        self.0
    }
}

impl From<[u8; GROUP_BYTES]> for PublicKey {
    fn from(bytes: [u8; GROUP_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey")
            .field(&hex::encode(self.0))
            .finish()
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        if bytes.len() != GROUP_BYTES {
            return Err(serde::de::Error::invalid_length(bytes.len(), &"192 bytes"));
        }
        let mut arr = [0u8; GROUP_BYTES];
        arr.copy_from_slice(&bytes);
        Ok(PublicKey(arr))
    }
}

/// The raw UniformDH shared secret.
///
/// Exactly [`GROUP_BYTES`] big-endian bytes, left-padded with zeros.
/// Zeroized on drop and compared in constant time. No key derivation is
/// applied; callers feed it to their own KDF.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; GROUP_BYTES]);

impl SharedSecret {
    pub(crate) fn new(bytes: [u8; GROUP_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the secret bytes.
    pub fn as_bytes(&self) -> &[u8; GROUP_BYTES] {
        &self.0
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}
