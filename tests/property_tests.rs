mod common;

use proptest::prelude::*;
use uniform_dh::{Error, PublicKey, UniformDh, GROUP_BYTES, MODP_1536};

fn draw() -> impl Strategy<Value = [u8; GROUP_BYTES]> {
    prop::collection::vec(any::<u8>(), GROUP_BYTES).prop_map(|bytes| {
        let mut arr = [0u8; GROUP_BYTES];
        arr.copy_from_slice(&bytes);
        arr
    })
}

/// A draw whose exponent is zero once the low bit is cleared.
fn is_zero_exponent(draw: &[u8; GROUP_BYTES]) -> bool {
    draw[..GROUP_BYTES - 1].iter().all(|&b| b == 0) && draw[GROUP_BYTES - 1] <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn secrets_agree_for_any_draws(a in draw(), b in draw()) {
        common::init_tracing();

        let mut alice = UniformDh::from_secret_bytes(&a).expect("Context creation should succeed");
        let mut bob = UniformDh::from_secret_bytes(&b).expect("Context creation should succeed");

        let alice_secret = alice.shared_secret(&bob.public_key());
        let bob_secret = bob.shared_secret(&alice.public_key());

        if is_zero_exponent(&a) || is_zero_exponent(&b) {
            prop_assert!(matches!(alice_secret, Err(Error::InvalidPublicKey(_))));
            prop_assert!(matches!(bob_secret, Err(Error::InvalidPublicKey(_))));
        } else {
            let s1 = alice_secret.expect("Non-degenerate draws should agree");
            let s2 = bob_secret.expect("Non-degenerate draws should agree");
            prop_assert_eq!(s1.as_bytes(), s2.as_bytes());
        }
    }

    #[test]
    fn derivation_is_deterministic(a in draw(), b in draw()) {
        let peer = UniformDh::from_secret_bytes(&b).expect("Context creation should succeed");
        let peer_key = peer.public_key();

        let mut first = UniformDh::from_secret_bytes(&a).expect("Context creation should succeed");
        let mut second = UniformDh::from_secret_bytes(&a).expect("Context creation should succeed");
        prop_assert_eq!(first.public_key(), second.public_key());

        let s1 = first.shared_secret(&peer_key);
        let s2 = second.shared_secret(&peer_key);
        if let (Ok(s1), Ok(s2)) = (s1, s2) {
            prop_assert_eq!(s1.as_bytes(), s2.as_bytes());

            // A repeated call on the same context gives the same bytes.
            let s3 = first.shared_secret(&peer_key).expect("Repeated derivation should succeed");
            prop_assert_eq!(s1.as_bytes(), s3.as_bytes());
        }
    }

    #[test]
    fn public_key_bytes_roundtrip(a in draw()) {
        let context = UniformDh::from_secret_bytes(&a).expect("Context creation should succeed");
        let key = context.public_key();

        let decoded = MODP_1536
            .decode_element(key.as_bytes())
            .expect("Own public key should decode");
        prop_assert_eq!(&MODP_1536.encode_element(&decoded), key.as_bytes());

        let reparsed = PublicKey::from_bytes(key.as_ref()).expect("Parsing should succeed");
        prop_assert_eq!(reparsed, key);
    }

    #[test]
    fn wrong_lengths_are_rejected(bytes in prop::collection::vec(any::<u8>(), 0..400)) {
        prop_assume!(bytes.len() != GROUP_BYTES);

        let mut context = UniformDh::new().expect("Context creation should succeed");
        let err = context
            .shared_secret_from_bytes(&bytes)
            .expect_err("Wrong-length input should be rejected");
        let is_length_error =
            matches!(err, Error::InvalidLength { actual, .. } if actual == bytes.len());
        prop_assert!(is_length_error);
    }

    #[test]
    fn low_bit_selects_reflection(a in draw()) {
        let mut even = a;
        even[GROUP_BYTES - 1] &= 0xFE;
        let mut odd = even;
        odd[GROUP_BYTES - 1] |= 1;

        let plain = UniformDh::from_secret_bytes(&even).expect("Context creation should succeed");
        let reflected =
            UniformDh::from_secret_bytes(&odd).expect("Context creation should succeed");

        let plain_value = MODP_1536.decode_element(plain.public_key().as_bytes());
        let reflected_value = MODP_1536.decode_element(reflected.public_key().as_bytes());
        if let (Ok(x), Ok(y)) = (plain_value, reflected_value) {
            prop_assert_eq!(MODP_1536.reflect(&x), y);
        }
    }
}
