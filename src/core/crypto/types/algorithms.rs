/*!
Algorithm type definitions.

This module defines the key types, hash functions and signature
parameters referenced by the scheme registry.
*/

use std::fmt;

/// Key types a signature scheme can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyAlgorithm {
    /// RSA keys (PKCS#1 v1.5 or PSS with rsaEncryption keys)
    Rsa,
    /// RSASSA-PSS keys
    RsaPss,
    /// Elliptic curve keys
    Ec,
    /// DSA keys
    Dsa,
    /// Ed25519 keys
    Ed25519,
    /// Ed448 keys
    Ed448,
}

impl KeyAlgorithm {
    /// Get the name of the key algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::RsaPss => "RSASSA-PSS",
            KeyAlgorithm::Ec => "EC",
            KeyAlgorithm::Dsa => "DSA",
            KeyAlgorithm::Ed25519 => "Ed25519",
            KeyAlgorithm::Ed448 => "Ed448",
        }
    }

    /// Parse a key algorithm name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        [
            KeyAlgorithm::Rsa,
            KeyAlgorithm::RsaPss,
            KeyAlgorithm::Ec,
            KeyAlgorithm::Dsa,
            KeyAlgorithm::Ed25519,
            KeyAlgorithm::Ed448,
        ]
        .into_iter()
        .find(|alg| alg.name().eq_ignore_ascii_case(name))
    }

    /// Whether key size limits apply to this key type
    pub fn is_rsa_family(&self) -> bool {
        matches!(self, KeyAlgorithm::Rsa | KeyAlgorithm::RsaPss)
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash functions used in signature parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Get the name of the hash as a string
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    pub const fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

/// Algorithm parameters needed to instantiate a signer or verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum SignatureParams {
    /// RSASSA-PSS with MGF1
    Pss {
        /// Message digest
        hash: HashAlgorithm,
        /// Digest used by MGF1
        mgf_hash: HashAlgorithm,
        /// Salt length in bytes
        salt_len: usize,
    },
}

impl SignatureParams {
    /// PSS parameters as used by TLS 1.3: MGF1 with the same hash, salt the size of the digest
    pub const fn pss(hash: HashAlgorithm) -> Self {
        SignatureParams::Pss {
            hash,
            mgf_hash: hash,
            salt_len: hash.output_size(),
        }
    }
}

/// Cryptographic primitive kinds seen by algorithm constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoPrimitive {
    /// Message digests
    MessageDigest,
    /// Digital signatures
    Signature,
    /// Key agreement
    KeyAgreement,
    /// Key encapsulation
    KeyEncapsulation,
    /// Block or stream ciphers
    Cipher,
}
