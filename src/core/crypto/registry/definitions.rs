/*!
The fixed table of signature schemes.

Order is significant: it is the default selection priority.
*/

use crate::core::crypto::types::{
    HashAlgorithm, KeyAlgorithm, NamedGroup, ProtocolVersion, SignatureParams,
};

/// Static description of one signature scheme
#[derive(Debug, PartialEq, Eq)]
pub struct SchemeDefinition {
    /// 16-bit wire identifier (hash byte, signature byte)
    pub id: u16,
    /// Canonical lowercase name
    pub name: &'static str,
    /// Provider-facing signature algorithm
    pub algorithm: &'static str,
    /// Compatible key type
    pub key_algorithm: KeyAlgorithm,
    /// Parameters needed to instantiate signers and verifiers
    pub params: Option<SignatureParams>,
    /// Curve the scheme is bound to, for TLS 1.3 style ECDSA
    pub named_group: Option<NamedGroup>,
    /// Minimum key length in bits, `None` when unbounded
    pub minimal_key_size: Option<u32>,
    /// Versions in which the scheme may appear at all
    pub supported_protocols: &'static [ProtocolVersion],
    /// Versions in which the scheme may sign handshake messages
    pub handshake_supported_protocols: &'static [ProtocolVersion],
}

impl SchemeDefinition {
    /// High byte of the identifier
    pub fn hash_index(&self) -> u8 {
        (self.id >> 8) as u8
    }
}

pub const ED25519: u16 = 0x0807;
pub const ED448: u16 = 0x0808;
pub const ECDSA_SECP256R1_SHA256: u16 = 0x0403;
pub const ECDSA_SECP384R1_SHA384: u16 = 0x0503;
pub const ECDSA_SECP521R1_SHA512: u16 = 0x0603;
pub const RSA_PSS_RSAE_SHA256: u16 = 0x0804;
pub const RSA_PSS_RSAE_SHA384: u16 = 0x0805;
pub const RSA_PSS_RSAE_SHA512: u16 = 0x0806;
pub const RSA_PSS_PSS_SHA256: u16 = 0x0809;
pub const RSA_PSS_PSS_SHA384: u16 = 0x080a;
pub const RSA_PSS_PSS_SHA512: u16 = 0x080b;
pub const RSA_PKCS1_SHA256: u16 = 0x0401;
pub const RSA_PKCS1_SHA384: u16 = 0x0501;
pub const RSA_PKCS1_SHA512: u16 = 0x0601;
pub const DSA_SHA256: u16 = 0x0402;
pub const ECDSA_SHA224: u16 = 0x0303;
pub const RSA_SHA224: u16 = 0x0301;
pub const DSA_SHA224: u16 = 0x0302;
pub const ECDSA_SHA1: u16 = 0x0203;
pub const RSA_PKCS1_SHA1: u16 = 0x0201;
pub const DSA_SHA1: u16 = 0x0202;
pub const RSA_MD5: u16 = 0x0101;

const fn scheme(
    id: u16,
    name: &'static str,
    algorithm: &'static str,
    key_algorithm: KeyAlgorithm,
    supported_protocols: &'static [ProtocolVersion],
) -> SchemeDefinition {
    SchemeDefinition {
        id,
        name,
        algorithm,
        key_algorithm,
        params: None,
        named_group: None,
        minimal_key_size: None,
        supported_protocols,
        handshake_supported_protocols: supported_protocols,
    }
}

const fn ecdsa(
    id: u16,
    name: &'static str,
    algorithm: &'static str,
    group: NamedGroup,
) -> SchemeDefinition {
    SchemeDefinition {
        named_group: Some(group),
        ..scheme(id, name, algorithm, KeyAlgorithm::Ec, ProtocolVersion::PROTOCOLS_TO_13)
    }
}

const fn rsa(
    id: u16,
    name: &'static str,
    algorithm: &'static str,
    minimal_key_size: u32,
    supported_protocols: &'static [ProtocolVersion],
    handshake_supported_protocols: &'static [ProtocolVersion],
) -> SchemeDefinition {
    SchemeDefinition {
        minimal_key_size: Some(minimal_key_size),
        handshake_supported_protocols,
        ..scheme(id, name, algorithm, KeyAlgorithm::Rsa, supported_protocols)
    }
}

const fn rsa_pss(
    id: u16,
    name: &'static str,
    key_algorithm: KeyAlgorithm,
    hash: HashAlgorithm,
    minimal_key_size: u32,
) -> SchemeDefinition {
    SchemeDefinition {
        params: Some(SignatureParams::pss(hash)),
        minimal_key_size: Some(minimal_key_size),
        ..scheme(id, name, "RSASSA-PSS", key_algorithm, ProtocolVersion::PROTOCOLS_12_13)
    }
}

/// Every known scheme, in default priority order
pub static SCHEME_DEFINITIONS: [SchemeDefinition; 22] = [
    // EdDSA
    scheme(
        ED25519,
        "ed25519",
        "Ed25519",
        KeyAlgorithm::Ed25519,
        ProtocolVersion::PROTOCOLS_OF_13,
    ),
    scheme(ED448, "ed448", "Ed448", KeyAlgorithm::Ed448, ProtocolVersion::PROTOCOLS_OF_13),
    // ECDSA bound to a curve
    ecdsa(
        ECDSA_SECP256R1_SHA256,
        "ecdsa_secp256r1_sha256",
        "SHA256withECDSA",
        NamedGroup::Secp256r1,
    ),
    ecdsa(
        ECDSA_SECP384R1_SHA384,
        "ecdsa_secp384r1_sha384",
        "SHA384withECDSA",
        NamedGroup::Secp384r1,
    ),
    ecdsa(
        ECDSA_SECP521R1_SHA512,
        "ecdsa_secp521r1_sha512",
        "SHA512withECDSA",
        NamedGroup::Secp521r1,
    ),
    // RSASSA-PSS with rsaEncryption keys; 528 bits fits a SHA-256 digest plus salt
    rsa_pss(
        RSA_PSS_RSAE_SHA256,
        "rsa_pss_rsae_sha256",
        KeyAlgorithm::Rsa,
        HashAlgorithm::Sha256,
        528,
    ),
    rsa_pss(
        RSA_PSS_RSAE_SHA384,
        "rsa_pss_rsae_sha384",
        KeyAlgorithm::Rsa,
        HashAlgorithm::Sha384,
        784,
    ),
    rsa_pss(
        RSA_PSS_RSAE_SHA512,
        "rsa_pss_rsae_sha512",
        KeyAlgorithm::Rsa,
        HashAlgorithm::Sha512,
        1040,
    ),
    // RSASSA-PSS with RSASSA-PSS keys
    rsa_pss(
        RSA_PSS_PSS_SHA256,
        "rsa_pss_pss_sha256",
        KeyAlgorithm::RsaPss,
        HashAlgorithm::Sha256,
        528,
    ),
    rsa_pss(
        RSA_PSS_PSS_SHA384,
        "rsa_pss_pss_sha384",
        KeyAlgorithm::RsaPss,
        HashAlgorithm::Sha384,
        784,
    ),
    rsa_pss(
        RSA_PSS_PSS_SHA512,
        "rsa_pss_pss_sha512",
        KeyAlgorithm::RsaPss,
        HashAlgorithm::Sha512,
        1040,
    ),
    // RSASSA-PKCS1-v1_5; certificates only in TLS 1.3.
    // Some providers report 511 bits for 512-bit keys.
    rsa(
        RSA_PKCS1_SHA256,
        "rsa_pkcs1_sha256",
        "SHA256withRSA",
        511,
        ProtocolVersion::PROTOCOLS_TO_13,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    rsa(
        RSA_PKCS1_SHA384,
        "rsa_pkcs1_sha384",
        "SHA384withRSA",
        768,
        ProtocolVersion::PROTOCOLS_TO_13,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    rsa(
        RSA_PKCS1_SHA512,
        "rsa_pkcs1_sha512",
        "SHA512withRSA",
        768,
        ProtocolVersion::PROTOCOLS_TO_13,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    // Legacy
    scheme(
        DSA_SHA256,
        "dsa_sha256",
        "SHA256withDSA",
        KeyAlgorithm::Dsa,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    scheme(
        ECDSA_SHA224,
        "ecdsa_sha224",
        "SHA224withECDSA",
        KeyAlgorithm::Ec,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    rsa(
        RSA_SHA224,
        "rsa_sha224",
        "SHA224withRSA",
        511,
        ProtocolVersion::PROTOCOLS_TO_12,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    scheme(
        DSA_SHA224,
        "dsa_sha224",
        "SHA224withDSA",
        KeyAlgorithm::Dsa,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    scheme(
        ECDSA_SHA1,
        "ecdsa_sha1",
        "SHA1withECDSA",
        KeyAlgorithm::Ec,
        ProtocolVersion::PROTOCOLS_TO_13,
    ),
    rsa(
        RSA_PKCS1_SHA1,
        "rsa_pkcs1_sha1",
        "SHA1withRSA",
        511,
        ProtocolVersion::PROTOCOLS_TO_13,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    scheme(
        DSA_SHA1,
        "dsa_sha1",
        "SHA1withDSA",
        KeyAlgorithm::Dsa,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
    rsa(
        RSA_MD5,
        "rsa_md5",
        "MD5withRSA",
        511,
        ProtocolVersion::PROTOCOLS_TO_12,
        ProtocolVersion::PROTOCOLS_TO_12,
    ),
];

/// Find the static definition for an identifier
pub fn definition_of(id: u16) -> Option<&'static SchemeDefinition> {
    SCHEME_DEFINITIONS.iter().find(|def| def.id == id)
}
