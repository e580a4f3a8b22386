/*!
# TLS Signature Schemes

Signature scheme negotiation for TLS-style handshakes: a fixed registry of
signature schemes and the algorithms that pick a usable one under local
policy, the peer's request and the constraints of the local key.

## Overview

- A fixed, ordered registry binding each 16-bit scheme identifier to a
  signature algorithm, key type, optional curve, minimum key size and the
  protocol versions it applies to
- Availability checked once per scheme against a pluggable
  [`CryptoProvider`], with injectable exclusion predicates
- Id/name resolution, including TLS 1.2 style names for unknown ids
- Policy filtering (allow-list, algorithm constraints, active versions)
- Peer offer filtering that keeps the peer's order
- Verification and signing preference, with curve matching, RSA key size
  limits and per-candidate fallback when a signer cannot be created
- A built-in provider for Ed25519 and ECDSA on P-256/P-384

## Example

```no_run
use std::sync::Arc;
use tls_sigschemes::{
    Possession, PrivateKey, ProtocolVersion, RustCryptoProvider, SchemeRegistry, SchemeSelector,
};

let registry = SchemeRegistry::with_provider(Arc::new(RustCryptoProvider::new()));
let selector = SchemeSelector::new(&registry);

// Schemes the peer offered, in its order
let offered = selector.peer_schemes(ProtocolVersion::Tls13, &[0x0403, 0x0807]);

let possession = Possession::new(PrivateKey::generate_ed25519());
if let Some((scheme, mut signer)) =
    selector.signer_of_preferable_scheme(&offered, &possession, ProtocolVersion::Tls13)
{
    signer.update(b"transcript");
    let signature = signer.sign().unwrap();
    println!("{} produced {} bytes", scheme, signature.len());
}
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::constants::SIZE_IN_RECORD;
pub use crate::core::error::{Error, Result};

pub use crate::core::crypto::config::SignatureConfig;
pub use crate::core::crypto::keys::{ExternalKey, Possession, PrivateKey, PublicKey};
pub use crate::core::crypto::provider::RustCryptoProvider;
pub use crate::core::crypto::registry::{
    HashFamilyExclusion, NoExclusion, SchemeDefinition, SchemeExclusion, SchemeRegistry,
    SignatureScheme, algorithm_names, global, initialize, install, legacy_name, lookup_by_id,
    name_of_id, scheme_by_name,
};
pub use crate::core::crypto::selector::{
    SchemeSelector, SelectedSigner, negotiate_verification_scheme, preferable_scheme,
};
pub use crate::core::crypto::traits::{
    AlgorithmConstraints, CryptoProvider, DisabledAlgorithms, NamedGroupRegistry, PermitAll,
    Signer, SupportedGroups, Verifier,
};
pub use crate::core::crypto::types::{
    CryptoPrimitive, EcParameters, HashAlgorithm, KeyAlgorithm, NamedGroup, ProtocolVersion,
    SignatureParams,
};

/// Scheme identifiers
pub mod ids {
    pub use crate::core::crypto::registry::definitions::{
        DSA_SHA1, DSA_SHA224, DSA_SHA256, ECDSA_SECP256R1_SHA256, ECDSA_SECP384R1_SHA384,
        ECDSA_SECP521R1_SHA512, ECDSA_SHA1, ECDSA_SHA224, ED448, ED25519, RSA_MD5,
        RSA_PKCS1_SHA1, RSA_PKCS1_SHA256, RSA_PKCS1_SHA384, RSA_PKCS1_SHA512, RSA_PSS_PSS_SHA256,
        RSA_PSS_PSS_SHA384, RSA_PSS_PSS_SHA512, RSA_PSS_RSAE_SHA256, RSA_PSS_RSAE_SHA384,
        RSA_PSS_RSAE_SHA512, RSA_SHA224,
    };
}
