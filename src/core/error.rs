/*!
Error handling for signature scheme negotiation.

Filtering never fails; it only narrows. The errors below surface from
provider instantiation, verifier construction, configuration and the
negotiation wrappers that turn an empty selection into a failure.
*/

use thiserror::Error;

/// Result type for signature scheme negotiation
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for signature scheme negotiation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The provider cannot instantiate the algorithm
    #[error("Unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Negotiation produced no usable scheme
    #[error("No matching signature scheme: {0}")]
    NoMatchingScheme(String),

    /// A signer could not be bound to the key for this scheme
    #[error("Key incompatible with {scheme}: {reason}")]
    KeyIncompatible {
        /// Scheme that was being instantiated
        scheme: String,
        /// Provider-supplied reason
        reason: String,
    },

    /// A verifier could not be built for a negotiated scheme
    #[error("Cannot construct verifier for {scheme}: {reason}")]
    VerifierConstruction {
        /// Negotiated scheme
        scheme: String,
        /// Underlying failure
        reason: String,
    },

    /// Key material is malformed or of the wrong kind
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Signature bytes could not be decoded
    #[error("Invalid signature encoding")]
    InvalidSignature,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The process-wide registry was already initialized
    #[error("Signature scheme registry already initialized")]
    AlreadyInitialized,

    /// Cryptographic error
    #[error("Cryptographic error: {0}")]
    Crypto(String),
}

impl Error {
    /// Wrap any failure as a verifier construction error for `scheme`.
    pub fn verifier_construction<S: Into<String>>(scheme: &str, reason: S) -> Self {
        Error::VerifierConstruction {
            scheme: scheme.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a key incompatibility error for `scheme`.
    pub fn key_incompatible<S: Into<String>>(scheme: &str, reason: S) -> Self {
        Error::KeyIncompatible {
            scheme: scheme.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convert a string to an Error::Config
pub fn config_err<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::Config(msg.into()))
}

/// Convert a string to an Error::NoMatchingScheme
pub fn no_matching_scheme<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::NoMatchingScheme(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::key_incompatible("ed25519", "not an Ed25519 key");
        assert_eq!(err.to_string(), "Key incompatible with ed25519: not an Ed25519 key");

        let err = Error::verifier_construction("rsa_pkcs1_sha256", "provider missing");
        assert!(err.to_string().contains("rsa_pkcs1_sha256"));
    }

    #[test]
    fn test_helpers() {
        let result: Result<()> = no_matching_scheme("no signer");
        assert_eq!(result, Err(Error::NoMatchingScheme("no signer".into())));

        let result: Result<u8> = config_err("bad");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
