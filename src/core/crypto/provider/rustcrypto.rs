/*!
Built-in provider backed by the RustCrypto ecosystem.

Supports Ed25519 and ECDSA over secp256r1/secp384r1 with SHA-224, SHA-256
and SHA-384. ECDSA signers stream the message through a `sha2` hasher and sign
the prehash, emitting DER signatures as TLS expects.
*/

use ed25519_dalek::Signer as _;
use ed25519_dalek::Verifier as _;
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use sha2::{Digest, Sha224, Sha256, Sha384};

use crate::core::crypto::keys::{PrivateKey, PublicKey};
use crate::core::crypto::traits::{CryptoProvider, Signer, Verifier};
use crate::core::crypto::types::SignatureParams;
use crate::core::error::{Error, Result};

/// Ed25519 algorithm name
pub const ED25519: &str = "Ed25519";

/// ECDSA algorithm names this provider can instantiate.
///
/// `SHA512withECDSA` is left out: it only backs the secp521r1 scheme and
/// there is no P-521 key type here.
pub const ECDSA_ALGORITHMS: [&str; 3] = ["SHA224withECDSA", "SHA256withECDSA", "SHA384withECDSA"];

/// Provider backed by `ed25519-dalek`, `p256`, `p384` and `sha2`
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    /// Create the provider
    pub fn new() -> Self {
        Self
    }

    fn is_ed25519(algorithm: &str) -> bool {
        algorithm.eq_ignore_ascii_case(ED25519)
    }
}

impl CryptoProvider for RustCryptoProvider {
    fn can_instantiate(&self, algorithm: &str) -> bool {
        Self::is_ed25519(algorithm) || MessageDigest::for_ecdsa(algorithm).is_some()
    }

    fn is_ec_available(&self) -> bool {
        true
    }

    fn new_signer(
        &self,
        algorithm: &str,
        params: Option<&SignatureParams>,
        key: &PrivateKey,
    ) -> Result<Box<dyn Signer>> {
        if params.is_some() {
            return Err(Error::UnsupportedAlgorithm(format!("{} with parameters", algorithm)));
        }

        if Self::is_ed25519(algorithm) {
            return match key {
                PrivateKey::Ed25519(key) => Ok(Box::new(Ed25519Signer {
                    key: key.clone(),
                    message: Vec::new(),
                })),
                other => Err(Error::key_incompatible(
                    algorithm,
                    format!("{} key", other.algorithm()),
                )),
            };
        }

        let digest = MessageDigest::for_ecdsa(algorithm)
            .ok_or_else(|| Error::UnsupportedAlgorithm(algorithm.to_string()))?;
        let key = match key {
            PrivateKey::P256(key) => EcdsaSigningKey::P256(key.clone()),
            PrivateKey::P384(key) => EcdsaSigningKey::P384(key.clone()),
            other => {
                return Err(Error::key_incompatible(
                    algorithm,
                    format!("{} key", other.algorithm()),
                ));
            }
        };

        Ok(Box::new(EcdsaSigner {
            algorithm: algorithm.to_string(),
            key,
            digest,
        }))
    }

    fn new_verifier(
        &self,
        algorithm: &str,
        params: Option<&SignatureParams>,
        key: &PublicKey,
    ) -> Result<Box<dyn Verifier>> {
        if params.is_some() {
            return Err(Error::UnsupportedAlgorithm(format!("{} with parameters", algorithm)));
        }

        if Self::is_ed25519(algorithm) {
            return match key {
                PublicKey::Ed25519(key) => Ok(Box::new(Ed25519Verifier {
                    key: *key,
                    message: Vec::new(),
                })),
                other => Err(Error::InvalidKey(format!(
                    "{} cannot verify {}",
                    other.algorithm(),
                    algorithm
                ))),
            };
        }

        let digest = MessageDigest::for_ecdsa(algorithm)
            .ok_or_else(|| Error::UnsupportedAlgorithm(algorithm.to_string()))?;
        let key = match key {
            PublicKey::P256(key) => EcdsaVerifyingKey::P256(key.clone()),
            PublicKey::P384(key) => EcdsaVerifyingKey::P384(key.clone()),
            other => {
                return Err(Error::InvalidKey(format!(
                    "{} cannot verify {}",
                    other.algorithm(),
                    algorithm
                )));
            }
        };

        Ok(Box::new(EcdsaVerifier {
            algorithm: algorithm.to_string(),
            key,
            digest,
        }))
    }
}

enum MessageDigest {
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
}

impl MessageDigest {
    fn for_ecdsa(algorithm: &str) -> Option<Self> {
        let [sha224, sha256, sha384] = ECDSA_ALGORITHMS;
        if algorithm.eq_ignore_ascii_case(sha224) {
            Some(MessageDigest::Sha224(Sha224::new()))
        } else if algorithm.eq_ignore_ascii_case(sha256) {
            Some(MessageDigest::Sha256(Sha256::new()))
        } else if algorithm.eq_ignore_ascii_case(sha384) {
            Some(MessageDigest::Sha384(Sha384::new()))
        } else {
            None
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            MessageDigest::Sha224(hasher) => hasher.update(data),
            MessageDigest::Sha256(hasher) => hasher.update(data),
            MessageDigest::Sha384(hasher) => hasher.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            MessageDigest::Sha224(hasher) => hasher.finalize().to_vec(),
            MessageDigest::Sha256(hasher) => hasher.finalize().to_vec(),
            MessageDigest::Sha384(hasher) => hasher.finalize().to_vec(),
        }
    }
}

struct Ed25519Signer {
    key: ed25519_dalek::SigningKey,
    message: Vec<u8>,
}

impl Signer for Ed25519Signer {
    fn algorithm(&self) -> &str {
        ED25519
    }

    // Pure Ed25519 needs the whole message
    fn update(&mut self, data: &[u8]) {
        self.message.extend_from_slice(data);
    }

    fn sign(self: Box<Self>) -> Result<Vec<u8>> {
        Ok(self.key.sign(&self.message).to_bytes().to_vec())
    }
}

struct Ed25519Verifier {
    key: ed25519_dalek::VerifyingKey,
    message: Vec<u8>,
}

impl Verifier for Ed25519Verifier {
    fn algorithm(&self) -> &str {
        ED25519
    }

    fn update(&mut self, data: &[u8]) {
        self.message.extend_from_slice(data);
    }

    fn verify(self: Box<Self>, signature: &[u8]) -> Result<bool> {
        let signature = ed25519_dalek::Signature::from_slice(signature)
            .map_err(|_| Error::InvalidSignature)?;
        Ok(self.key.verify(&self.message, &signature).is_ok())
    }
}

enum EcdsaSigningKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

struct EcdsaSigner {
    algorithm: String,
    key: EcdsaSigningKey,
    digest: MessageDigest,
}

impl Signer for EcdsaSigner {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    fn sign(self: Box<Self>) -> Result<Vec<u8>> {
        let EcdsaSigner { key, digest, .. } = *self;
        let prehash = digest.finalize();
        match key {
            EcdsaSigningKey::P256(key) => {
                let signature: p256::ecdsa::Signature = key
                    .sign_prehash(&prehash)
                    .map_err(|e| Error::Crypto(format!("ECDSA signing failed: {}", e)))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
            EcdsaSigningKey::P384(key) => {
                let signature: p384::ecdsa::Signature = key
                    .sign_prehash(&prehash)
                    .map_err(|e| Error::Crypto(format!("ECDSA signing failed: {}", e)))?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }
}

enum EcdsaVerifyingKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
}

struct EcdsaVerifier {
    algorithm: String,
    key: EcdsaVerifyingKey,
    digest: MessageDigest,
}

impl Verifier for EcdsaVerifier {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    fn verify(self: Box<Self>, signature: &[u8]) -> Result<bool> {
        let EcdsaVerifier { key, digest, .. } = *self;
        let prehash = digest.finalize();
        match key {
            EcdsaVerifyingKey::P256(key) => {
                let signature = p256::ecdsa::Signature::from_der(signature)
                    .map_err(|_| Error::InvalidSignature)?;
                Ok(key.verify_prehash(&prehash, &signature).is_ok())
            }
            EcdsaVerifyingKey::P384(key) => {
                let signature = p384::ecdsa::Signature::from_der(signature)
                    .map_err(|_| Error::InvalidSignature)?;
                Ok(key.verify_prehash(&prehash, &signature).is_ok())
            }
        }
    }
}
