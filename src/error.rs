//! Error types for UniformDH

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Group parameters cannot be used for modular arithmetic.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A peer public key had the wrong number of bytes.
    #[error("Invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A peer public key is out of range or a degenerate group element.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The random source could not supply the requested bytes.
    #[error("Entropy source failure: {0}")]
    Entropy(String),

    /// An internal consistency check failed after key generation.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Returns `true` for failures caused by the environment or a bug rather
    /// than by caller-supplied input.
    ///
    /// Fatal errors must not be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidParams(_) | Error::Entropy(_) | Error::InvariantViolation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_recoverable() {
        let err = Error::InvalidLength {
            expected: 192,
            actual: 191,
        };
        assert!(!err.is_fatal());
        assert!(!Error::InvalidPublicKey("zero".to_string()).is_fatal());
    }

    #[test]
    fn environment_errors_are_fatal() {
        assert!(Error::Entropy("unseeded".to_string()).is_fatal());
        assert!(Error::InvariantViolation("odd exponent".to_string()).is_fatal());
        assert!(Error::InvalidParams("even modulus".to_string()).is_fatal());
    }

    #[test]
    fn length_message_names_both_sizes() {
        let err = Error::InvalidLength {
            expected: 192,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid public key length: expected 192 bytes, got 10"
        );
    }
}
