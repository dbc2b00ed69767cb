use core::fmt;

use crypto_bigint::U1536;
use rand_core::{CryptoRngCore, OsRng, RngCore};
use subtle::{Choice, ConditionallySelectable};
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use super::{PublicKey, SharedSecret};
use crate::groups::{GroupParams, GROUP_BITS, GROUP_BYTES, MODP_1536};
use crate::{Error, Result};

/// Where a context is in its one-way lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Keys are generated; no peer key has been consumed yet.
    AwaitingPeer,
    /// A shared secret has been derived.
    SecretComputed,
}

/// One participant in a UniformDH exchange.
///
/// Owns an even private exponent `x` and the public value derived from it.
/// The public value is `g^x mod p` or `p - g^x mod p`, chosen by the low bit
/// of the random draw, which makes the encoded key uniform over `[1, p)`.
/// Because `x` is even, `(p - Y)^x = Y^x (mod p)`, so both parties agree on
/// the secret whichever representative they received.
///
/// # Security
///
/// - Create one context per exchange and never reuse it for another peer
/// - The private exponent is zeroized when the context is dropped
/// - Contexts cannot be cloned or serialized
pub struct UniformDh {
    group: &'static GroupParams,
    private_exponent: U1536,
    public_value: U1536,
    shared_secret: Option<SharedSecret>,
}

impl UniformDh {
    /// Creates a new context with a private exponent drawn from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the OS cannot supply random bytes and
    /// [`Error::InvariantViolation`] if the generated key fails its
    /// consistency checks. Both are fatal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniform_dh::UniformDh;
    ///
    /// let alice = UniformDh::new().unwrap();
    /// assert_eq!(alice.public_key().as_bytes().len(), 192);
    /// ```
    pub fn new() -> Result<Self> {
        Self::from_rng(&mut OsRng)
    }

    /// Creates a new context drawing [`GROUP_BYTES`] bytes from `rng`.
    ///
    /// A failing `rng` is reported, never retried.
    pub fn from_rng<R: CryptoRngCore>(rng: &mut R) -> Result<Self> {
        let mut draw = Zeroizing::new([0u8; GROUP_BYTES]);
        RngCore::try_fill_bytes(rng, &mut draw[..])
            .map_err(|e| Error::Entropy(e.to_string()))?;
        Self::from_draw(&MODP_1536, &draw)
    }

    /// Creates a context from a caller-supplied random draw.
    ///
    /// `bytes` plays the role of the raw 1536-bit draw: its low bit selects
    /// the reflection and is then cleared to form the private exponent.
    /// Only use this with bytes from a CSPRNG or for known-answer tests.
    pub fn from_secret_bytes(bytes: &[u8; GROUP_BYTES]) -> Result<Self> {
        Self::from_draw(&MODP_1536, bytes)
    }

    fn from_draw(group: &'static GroupParams, draw: &[u8; GROUP_BYTES]) -> Result<Self> {
        let mut exponent_bytes = Zeroizing::new(*draw);
        let flip = Choice::from(exponent_bytes[GROUP_BYTES - 1] & 1);
        exponent_bytes[GROUP_BYTES - 1] &= 0xFE;

        debug_assert!(group.validate().is_ok());

        // The exponent lives only inside the context, which wipes it on drop.
        let mut context = Self {
            group,
            private_exponent: U1536::from_be_slice(&exponent_bytes[..]),
            public_value: U1536::ZERO,
            shared_secret: None,
        };
        let raw_public = Zeroizing::new(group.pow_generator(&context.private_exponent)?);
        let reflected = Zeroizing::new(group.reflect(&raw_public));
        context.public_value = U1536::conditional_select(&raw_public, &reflected, flip);
        context.check_invariants()?;

        debug!(group = group.name(), "created UniformDH context");
        Ok(context)
    }

    fn check_invariants(&self) -> Result<()> {
        if self.private_exponent.bits() > GROUP_BITS {
            return Err(Error::InvariantViolation(format!(
                "private exponent exceeds {GROUP_BITS} bits"
            )));
        }

        let encoded = Zeroizing::new(self.group.encode_element(&self.private_exponent));
        if encoded[GROUP_BYTES - 1] & 1 != 0 {
            return Err(Error::InvariantViolation(
                "private exponent must be even".to_string(),
            ));
        }

        if self.public_value >= *self.group.modulus() {
            return Err(Error::InvariantViolation(
                "public value must be less than the modulus".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the group this context computes in.
    pub fn group(&self) -> &'static GroupParams {
        self.group
    }

    /// Returns the public key: exactly [`GROUP_BYTES`] big-endian bytes,
    /// zero-padded on the left.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::new(self.group.encode_element(&self.public_value))
    }

    /// Derives the shared secret from the peer's public key.
    ///
    /// The result is stored in the context and the phase moves to
    /// [`Phase::SecretComputed`]. The protocol expects exactly one call per
    /// context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPublicKey`] if the peer value is `0`, `1`,
    /// `p - 1`, not below `p`, or yields the identity as the secret.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniform_dh::UniformDh;
    ///
    /// let mut alice = UniformDh::new().unwrap();
    /// let mut bob = UniformDh::new().unwrap();
    ///
    /// let alice_secret = alice.shared_secret(&bob.public_key()).unwrap();
    /// let bob_secret = bob.shared_secret(&alice.public_key()).unwrap();
    /// assert_eq!(alice_secret, bob_secret);
    /// ```
    pub fn shared_secret(&mut self, peer: &PublicKey) -> Result<SharedSecret> {
        let peer_value = self.group.decode_element(peer.as_bytes()).map_err(|e| {
            warn!(error = %e, "rejected peer public key");
            e
        })?;

        let mut secret_value = self.group.pow(&peer_value, &self.private_exponent)?;
        if secret_value == U1536::ONE {
            secret_value.zeroize();
            warn!("peer public key produced the identity as shared secret");
            return Err(Error::InvalidPublicKey(
                "shared secret is the group identity".to_string(),
            ));
        }

        let secret = SharedSecret::new(self.group.encode_element(&secret_value));
        secret_value.zeroize();

        if self.shared_secret.is_some() {
            debug!("replacing previously derived UniformDH shared secret");
        }
        self.shared_secret = Some(secret.clone());

        debug!(group = self.group.name(), "derived UniformDH shared secret");
        Ok(secret)
    }

    /// Derives the shared secret from an unparsed peer key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bytes` is exactly
    /// [`GROUP_BYTES`] long, plus every error of [`UniformDh::shared_secret`].
    pub fn shared_secret_from_bytes(&mut self, bytes: &[u8]) -> Result<SharedSecret> {
        let peer = PublicKey::from_bytes(bytes).map_err(|e| {
            warn!(error = %e, "rejected peer public key");
            e
        })?;
        self.shared_secret(&peer)
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.shared_secret {
            Some(_) => Phase::SecretComputed,
            None => Phase::AwaitingPeer,
        }
    }

    /// Returns the most recently derived shared secret, if any.
    pub fn last_shared_secret(&self) -> Option<&SharedSecret> {
        self.shared_secret.as_ref()
    }

    fn wipe(&mut self) {
        self.private_exponent.zeroize();
        self.public_value.zeroize();
        self.shared_secret = None;
    }
}

impl Drop for UniformDh {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for UniformDh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformDh")
            .field("group", &self.group.name())
            .field("public_key", &self.public_key())
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
