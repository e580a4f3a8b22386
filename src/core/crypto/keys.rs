/*!
Key material handed to the selector and the provider.

Built-in variants hold RustCrypto keys directly. `External` keys describe
material that lives in another provider (an HSM, a platform keystore) and
only expose the facts negotiation needs: key type, size and curve.
*/

use std::fmt;

use rand::{Rng, rng};

use crate::core::crypto::types::{EcParameters, KeyAlgorithm, NamedGroup};
use crate::core::error::{Error, Result};

/// Key held by a provider other than the built-in one
#[derive(Clone, PartialEq, Eq)]
pub struct ExternalKey {
    /// Provider-facing key algorithm name, e.g. "RSA"
    pub algorithm: String,
    /// Key length in bits, when known
    pub bits: Option<u32>,
    /// Curve domain parameters for EC keys
    pub ec_parameters: Option<EcParameters>,
    /// Opaque handle or encoded key, interpreted only by its provider
    pub material: Vec<u8>,
}

impl ExternalKey {
    /// Describe a key of the given algorithm
    pub fn new<S: Into<String>>(algorithm: S) -> Self {
        Self {
            algorithm: algorithm.into(),
            bits: None,
            ec_parameters: None,
            material: Vec::new(),
        }
    }

    /// Set the key length in bits
    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = Some(bits);
        self
    }

    /// Set the curve domain parameters
    pub fn with_ec_parameters(mut self, params: EcParameters) -> Self {
        self.ec_parameters = Some(params);
        self
    }

    /// Attach provider-specific material
    pub fn with_material(mut self, material: Vec<u8>) -> Self {
        self.material = material;
        self
    }
}

impl fmt::Debug for ExternalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &self.bits)
            .field("ec_parameters", &self.ec_parameters)
            .finish_non_exhaustive()
    }
}

/// Private signing key
#[derive(Clone)]
pub enum PrivateKey {
    /// Ed25519 signing key
    Ed25519(ed25519_dalek::SigningKey),
    /// ECDSA key on secp256r1
    P256(p256::ecdsa::SigningKey),
    /// ECDSA key on secp384r1
    P384(p384::ecdsa::SigningKey),
    /// Key held by another provider
    External(ExternalKey),
}

impl PrivateKey {
    /// Generate a fresh Ed25519 key
    pub fn generate_ed25519() -> Self {
        let mut seed = [0u8; 32];
        rng().fill(&mut seed);
        PrivateKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed))
    }

    /// Generate a fresh P-256 key
    pub fn generate_p256() -> Self {
        // SigningKey::random wants a rand_core 0.6 RNG and rand 0.9 implements rand_core 0.9
        let mut scalar = [0u8; 32];
        loop {
            rng().fill(&mut scalar);
            // Rejects zero and values above the group order
            if let Ok(key) = p256::ecdsa::SigningKey::from_slice(&scalar) {
                return PrivateKey::P256(key);
            }
        }
    }

    /// Generate a fresh P-384 key
    pub fn generate_p384() -> Self {
        let mut scalar = [0u8; 48];
        loop {
            rng().fill(&mut scalar[..]);
            if let Ok(key) = p384::ecdsa::SigningKey::from_slice(&scalar) {
                return PrivateKey::P384(key);
            }
        }
    }

    /// Load an Ed25519 key from its 32-byte seed
    pub fn ed25519_from_bytes(bytes: &[u8]) -> Result<Self> {
        let seed: [u8; 32] = bytes
            .try_into()
            .map_err(|_| {
                Error::InvalidKey(format!("Ed25519 seed must be 32 bytes, got {}", bytes.len()))
            })?;
        Ok(PrivateKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed)))
    }

    /// Load a P-256 key from its big-endian scalar
    pub fn p256_from_bytes(bytes: &[u8]) -> Result<Self> {
        p256::ecdsa::SigningKey::from_slice(bytes)
            .map(PrivateKey::P256)
            .map_err(|e| Error::InvalidKey(format!("P-256 scalar: {}", e)))
    }

    /// Load a P-384 key from its big-endian scalar
    pub fn p384_from_bytes(bytes: &[u8]) -> Result<Self> {
        p384::ecdsa::SigningKey::from_slice(bytes)
            .map(PrivateKey::P384)
            .map_err(|e| Error::InvalidKey(format!("P-384 scalar: {}", e)))
    }

    /// Provider-facing key algorithm name
    pub fn algorithm(&self) -> &str {
        match self {
            PrivateKey::Ed25519(_) => KeyAlgorithm::Ed25519.name(),
            PrivateKey::P256(_) | PrivateKey::P384(_) => KeyAlgorithm::Ec.name(),
            PrivateKey::External(key) => &key.algorithm,
        }
    }

    /// Parsed key algorithm, `None` for algorithms no scheme uses
    pub fn key_algorithm(&self) -> Option<KeyAlgorithm> {
        KeyAlgorithm::from_name(self.algorithm())
    }

    /// Key length in bits, when known
    pub fn key_size(&self) -> Option<u32> {
        match self {
            PrivateKey::Ed25519(_) => Some(255),
            PrivateKey::P256(_) => Some(256),
            PrivateKey::P384(_) => Some(384),
            PrivateKey::External(key) => key.bits,
        }
    }

    /// Curve domain parameters for EC keys
    pub fn ec_parameters(&self) -> Option<EcParameters> {
        match self {
            PrivateKey::P256(_) => Some(EcParameters::for_group(NamedGroup::Secp256r1)),
            PrivateKey::P384(_) => Some(EcParameters::for_group(NamedGroup::Secp384r1)),
            PrivateKey::Ed25519(_) => None,
            PrivateKey::External(key) => key.ec_parameters.clone(),
        }
    }

    /// Matching public key for built-in keys
    pub fn public_key(&self) -> Option<PublicKey> {
        match self {
            PrivateKey::Ed25519(key) => Some(PublicKey::Ed25519(key.verifying_key())),
            PrivateKey::P256(key) => Some(PublicKey::P256(key.verifying_key().clone())),
            PrivateKey::P384(key) => Some(PublicKey::P384(key.verifying_key().clone())),
            PrivateKey::External(_) => None,
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKey::Ed25519(_) => f.write_str("PrivateKey::Ed25519(..)"),
            PrivateKey::P256(_) => f.write_str("PrivateKey::P256(..)"),
            PrivateKey::P384(_) => f.write_str("PrivateKey::P384(..)"),
            PrivateKey::External(key) => write!(f, "PrivateKey::External({:?})", key),
        }
    }
}

/// Public verification key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// Ed25519 verifying key
    Ed25519(ed25519_dalek::VerifyingKey),
    /// ECDSA key on secp256r1
    P256(p256::ecdsa::VerifyingKey),
    /// ECDSA key on secp384r1
    P384(p384::ecdsa::VerifyingKey),
    /// Key held by another provider
    External(ExternalKey),
}

impl PublicKey {
    /// Load an Ed25519 key from its 32-byte encoding
    pub fn ed25519_from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; 32] = bytes
            .try_into()
            .map_err(|_| {
                Error::InvalidKey(format!("Ed25519 key must be 32 bytes, got {}", bytes.len()))
            })?;
        ed25519_dalek::VerifyingKey::from_bytes(&raw)
            .map(PublicKey::Ed25519)
            .map_err(|e| Error::InvalidKey(format!("Ed25519 point: {}", e)))
    }

    /// Load a P-256 key from a SEC1 encoded point
    pub fn p256_from_sec1(bytes: &[u8]) -> Result<Self> {
        p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
            .map(PublicKey::P256)
            .map_err(|e| Error::InvalidKey(format!("P-256 point: {}", e)))
    }

    /// Load a P-384 key from a SEC1 encoded point
    pub fn p384_from_sec1(bytes: &[u8]) -> Result<Self> {
        p384::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
            .map(PublicKey::P384)
            .map_err(|e| Error::InvalidKey(format!("P-384 point: {}", e)))
    }

    /// Provider-facing key algorithm name
    pub fn algorithm(&self) -> &str {
        match self {
            PublicKey::Ed25519(_) => KeyAlgorithm::Ed25519.name(),
            PublicKey::P256(_) | PublicKey::P384(_) => KeyAlgorithm::Ec.name(),
            PublicKey::External(key) => &key.algorithm,
        }
    }

    /// Curve domain parameters for EC keys
    pub fn ec_parameters(&self) -> Option<EcParameters> {
        match self {
            PublicKey::P256(_) => Some(EcParameters::for_group(NamedGroup::Secp256r1)),
            PublicKey::P384(_) => Some(EcParameters::for_group(NamedGroup::Secp384r1)),
            PublicKey::Ed25519(_) => None,
            PublicKey::External(key) => key.ec_parameters.clone(),
        }
    }
}

/// Private key plus the certificate facts bound to it
#[derive(Debug, Clone)]
pub struct Possession {
    /// Key used to sign handshake messages
    pub private_key: PrivateKey,
    /// Curve parameters from the certificate, when they differ from the key's own
    pub certificate_ec_parameters: Option<EcParameters>,
}

impl Possession {
    /// Wrap a private key
    pub fn new(private_key: PrivateKey) -> Self {
        Self {
            private_key,
            certificate_ec_parameters: None,
        }
    }

    /// Record the curve named by the certificate
    pub fn with_certificate_ec_parameters(mut self, params: EcParameters) -> Self {
        self.certificate_ec_parameters = Some(params);
        self
    }

    /// Curve domain parameters of the signing key
    pub fn ec_parameters(&self) -> Option<EcParameters> {
        self.certificate_ec_parameters
            .clone()
            .or_else(|| self.private_key.ec_parameters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_key_facts() {
        let key = PrivateKey::generate_p256();
        assert_eq!(key.algorithm(), "EC");
        assert_eq!(key.key_algorithm(), Some(KeyAlgorithm::Ec));
        assert_eq!(key.ec_parameters(), Some(EcParameters::for_group(NamedGroup::Secp256r1)));

        let key = PrivateKey::generate_ed25519();
        assert_eq!(key.key_algorithm(), Some(KeyAlgorithm::Ed25519));
        assert!(key.ec_parameters().is_none());
        assert!(matches!(key.public_key(), Some(PublicKey::Ed25519(_))));
    }

    #[test]
    fn test_external_key_facts() {
        let key = PrivateKey::External(ExternalKey::new("rsa").with_bits(2048));
        assert_eq!(key.key_algorithm(), Some(KeyAlgorithm::Rsa));
        assert_eq!(key.key_size(), Some(2048));
        assert!(key.public_key().is_none());
    }

    #[test]
    fn test_invalid_key_lengths() {
        assert!(matches!(PrivateKey::ed25519_from_bytes(&[0u8; 31]), Err(Error::InvalidKey(_))));
        assert!(matches!(PrivateKey::p256_from_bytes(&[0u8; 32]), Err(Error::InvalidKey(_))));
        assert!(matches!(PublicKey::p384_from_sec1(&[4u8; 10]), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_debug_hides_material() {
        let key = PrivateKey::External(ExternalKey::new("RSA").with_material(vec![0xAA; 4]));
        let text = format!("{:?}", key);
        assert!(!text.contains("170"));
        assert!(text.contains("RSA"));
    }

    #[test]
    fn test_possession_prefers_certificate_params() {
        let possession = Possession::new(PrivateKey::generate_p256())
            .with_certificate_ec_parameters(EcParameters::for_group(NamedGroup::Secp384r1));
        assert_eq!(
            possession.ec_parameters(),
            Some(EcParameters::for_group(NamedGroup::Secp384r1))
        );
    }
}
