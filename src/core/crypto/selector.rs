/*!
Signature scheme selection.

Filtering narrows the registry (or a peer's offer) to what local policy
allows. Preference then picks one scheme for verifying a peer or for
signing with a local key. Filters never fail; they return possibly empty
lists. Only verifier construction reports an error.
*/

use log::{debug, trace, warn};

use crate::core::constants::targets;
use crate::core::crypto::config::SignatureConfig;
use crate::core::crypto::keys::{Possession, PublicKey};
use crate::core::crypto::registry::{SchemeRegistry, SignatureScheme, name_of_id};
use crate::core::crypto::traits::{
    AlgorithmConstraints, NamedGroupRegistry, PermitAll, Signer, SupportedGroups, Verifier,
};
use crate::core::crypto::types::{CryptoPrimitive, KeyAlgorithm, ProtocolVersion};
use crate::core::error::{Result, no_matching_scheme};

/// Primitive set passed to algorithm constraints for every scheme check
const SIGNATURE_PRIMITIVE: &[CryptoPrimitive] = &[CryptoPrimitive::Signature];

static PERMIT_ALL: PermitAll = PermitAll;
static DEFAULT_GROUPS: SupportedGroups = SupportedGroups::DEFAULT;
static UNRESTRICTED: SignatureConfig = SignatureConfig::UNRESTRICTED;

/// A chosen scheme together with a signer bound to the local key
pub type SelectedSigner = (SignatureScheme, Box<dyn Signer>);

/// Selects signature schemes against a registry and local policy
#[derive(Clone, Copy)]
pub struct SchemeSelector<'a> {
    registry: &'a SchemeRegistry,
    config: &'a SignatureConfig,
    constraints: &'a dyn AlgorithmConstraints,
    groups: &'a dyn NamedGroupRegistry,
}

impl<'a> SchemeSelector<'a> {
    /// Selector with no allow-list, no constraints and every group supported
    pub fn new(registry: &'a SchemeRegistry) -> Self {
        Self {
            registry,
            config: &UNRESTRICTED,
            constraints: &PERMIT_ALL,
            groups: &DEFAULT_GROUPS,
        }
    }

    /// Use `config` as the allow-list
    pub fn with_config(mut self, config: &'a SignatureConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `constraints` as the algorithm policy
    pub fn with_constraints(mut self, constraints: &'a dyn AlgorithmConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Use `groups` for curve resolution and local group support
    pub fn with_groups(mut self, groups: &'a dyn NamedGroupRegistry) -> Self {
        self.groups = groups;
        self
    }

    /// Registry this selector reads
    pub fn registry(&self) -> &'a SchemeRegistry {
        self.registry
    }

    fn permitted_by_constraints(&self, scheme: &SignatureScheme) -> bool {
        self.constraints
            .permits(SIGNATURE_PRIMITIVE, scheme.algorithm(), None)
    }

    /// Locally supported schemes for any of `active_protocols`, in registry order
    pub fn supported_schemes(&self, active_protocols: &[ProtocolVersion]) -> Vec<SignatureScheme> {
        let mut supported = Vec::new();
        for scheme in self.registry.all() {
            if !scheme.is_available() || !self.config.permits(scheme) {
                trace!(
                    target: targets::SELECTOR,
                    "Ignore unsupported signature scheme: {}", scheme
                );
                continue;
            }

            if !active_protocols.iter().any(|v| scheme.supports_protocol(*v)) {
                trace!(
                    target: targets::SELECTOR,
                    "Ignore inactive signature scheme: {}", scheme
                );
                continue;
            }

            if !self.permitted_by_constraints(scheme) {
                debug!(
                    target: targets::SELECTOR,
                    "Ignore disabled signature scheme: {}", scheme
                );
                continue;
            }

            supported.push(*scheme);
        }
        supported
    }

    /// Schemes the peer offered that are usable locally, in the peer's order
    pub fn peer_schemes(&self, version: ProtocolVersion, peer_ids: &[u16]) -> Vec<SignatureScheme> {
        let mut supported = Vec::new();
        for &id in peer_ids {
            let Some(scheme) = self.registry.lookup_by_id(id) else {
                warn!(
                    target: targets::SELECTOR,
                    "Unsupported signature scheme: {}", name_of_id(id)
                );
                continue;
            };

            if scheme.is_available()
                && scheme.supports_protocol(version)
                && self.config.permits(&scheme)
                && self.permitted_by_constraints(&scheme)
            {
                supported.push(scheme);
            } else {
                warn!(
                    target: targets::SELECTOR,
                    "Unsupported signature scheme: {}", scheme
                );
            }
        }
        supported
    }

    /// Pick a scheme and bind a signer for the key in `possession`.
    ///
    /// Candidates are tried in order. A candidate whose signer cannot be
    /// created is skipped, not fatal.
    pub fn signer_of_preferable_scheme(
        &self,
        candidates: &[SignatureScheme],
        possession: &Possession,
        version: ProtocolVersion,
    ) -> Option<SelectedSigner> {
        let signing_key = &possession.private_key;
        let key_algorithm = signing_key.key_algorithm();
        // Only RSA keys are checked against minimal sizes
        let key_size = match key_algorithm {
            Some(algorithm) if algorithm.is_rsa_family() => signing_key.key_size().unwrap_or(0),
            _ => u32::MAX,
        };

        for scheme in candidates {
            if !scheme.is_available()
                || !scheme.accepts_key_size(key_size)
                || !scheme.supports_handshake_protocol(version)
                || key_algorithm != Some(scheme.key_algorithm())
            {
                continue;
            }

            if let Some(group) = scheme.named_group() {
                let params = possession.ec_parameters();
                let key_group = params.as_ref().and_then(|p| self.groups.group_of(p));
                if key_group != Some(group) {
                    debug!(
                        target: targets::SELECTOR,
                        "Ignore the signature scheme ({}), unsupported EC parameters: {:?}",
                        scheme,
                        params
                    );
                    continue;
                }
            } else if scheme.key_algorithm() == KeyAlgorithm::Ec {
                // Legacy scheme without a bound curve: the peer must still
                // recognise the key's curve, so require local support for it
                let params = possession.ec_parameters();
                let key_group = params.as_ref().and_then(|p| self.groups.group_of(p));
                if !key_group.is_some_and(|g| self.groups.is_supported(g)) {
                    debug!(
                        target: targets::SELECTOR,
                        "Ignore the legacy signature scheme ({}), unsupported EC parameters: {:?}",
                        scheme,
                        params
                    );
                    continue;
                }
            }

            match scheme.signer(self.registry.provider(), signing_key) {
                Ok(signer) => return Some((*scheme, signer)),
                Err(e) => {
                    debug!(
                        target: targets::SELECTOR,
                        "Ignore unsupported signature scheme ({}): {}", scheme, e
                    );
                }
            }
        }

        None
    }

    /// Like [`signer_of_preferable_scheme`](Self::signer_of_preferable_scheme),
    /// failing with `NoMatchingScheme` when nothing fits
    pub fn negotiate_signer(
        &self,
        candidates: &[SignatureScheme],
        possession: &Possession,
        version: ProtocolVersion,
    ) -> Result<SelectedSigner> {
        match self.signer_of_preferable_scheme(candidates, possession, version) {
            Some(selected) => Ok(selected),
            None => no_matching_scheme(format!(
                "no signature scheme for {} key in {}",
                possession.private_key.algorithm(),
                version
            )),
        }
    }

    /// Build a verifier for a negotiated scheme
    pub fn verifier(
        &self,
        scheme: &SignatureScheme,
        key: &PublicKey,
    ) -> Result<Option<Box<dyn Verifier>>> {
        self.registry.verifier(scheme, key)
    }
}

/// First candidate usable for handshake signatures in `version` whose key
/// type matches the peer certificate's scheme
pub fn preferable_scheme(
    candidates: &[SignatureScheme],
    certificate_scheme: &SignatureScheme,
    version: ProtocolVersion,
) -> Option<SignatureScheme> {
    candidates
        .iter()
        .find(|scheme| {
            scheme.is_available()
                && scheme.supports_handshake_protocol(version)
                && scheme.key_algorithm() == certificate_scheme.key_algorithm()
        })
        .copied()
}

/// Like [`preferable_scheme`], failing with `NoMatchingScheme` when nothing fits
pub fn negotiate_verification_scheme(
    candidates: &[SignatureScheme],
    certificate_scheme: &SignatureScheme,
    version: ProtocolVersion,
) -> Result<SignatureScheme> {
    match preferable_scheme(candidates, certificate_scheme, version) {
        Some(scheme) => Ok(scheme),
        None => no_matching_scheme(format!(
            "no signature scheme compatible with {} in {}",
            certificate_scheme, version
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::core::crypto::keys::PrivateKey;
    use crate::core::crypto::provider::RustCryptoProvider;
    use crate::core::crypto::registry::definitions::*;
    use crate::core::crypto::traits::DisabledAlgorithms;
    use crate::core::error::Error;

    fn registry() -> SchemeRegistry {
        SchemeRegistry::with_provider(Arc::new(RustCryptoProvider::new()))
    }

    fn ids(schemes: &[SignatureScheme]) -> Vec<u16> {
        schemes.iter().map(|s| s.id()).collect()
    }

    #[test]
    fn test_supported_schemes_tls13() {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let supported = selector.supported_schemes(&[ProtocolVersion::Tls13]);
        assert_eq!(
            ids(&supported),
            vec![ED25519, ECDSA_SECP256R1_SHA256, ECDSA_SECP384R1_SHA384]
        );
    }

    #[test]
    fn test_supported_schemes_tls12() {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let supported = selector.supported_schemes(&[ProtocolVersion::Tls12]);
        assert_eq!(
            ids(&supported),
            vec![ECDSA_SECP256R1_SHA256, ECDSA_SECP384R1_SHA384, ECDSA_SHA224]
        );
    }

    #[test]
    fn test_supported_schemes_with_policy() {
        let registry = registry();
        let config = SignatureConfig::from_names(["ecdsa_secp384r1_sha384", "ed25519"]);
        let constraints = DisabledAlgorithms::new(["SHA384"]);
        let selector = SchemeSelector::new(&registry)
            .with_config(&config)
            .with_constraints(&constraints);
        let supported =
            selector.supported_schemes(&[ProtocolVersion::Tls13, ProtocolVersion::Tls12]);
        assert_eq!(ids(&supported), vec![ED25519]);
    }

    #[test]
    fn test_peer_schemes_keep_peer_order() {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let offered = [
            ECDSA_SECP384R1_SHA384,
            0x0000,
            ED25519,
            RSA_PKCS1_SHA256,
            ECDSA_SECP256R1_SHA256,
        ];
        let supported = selector.peer_schemes(ProtocolVersion::Tls13, &offered);
        assert_eq!(ids(&supported), vec![ECDSA_SECP384R1_SHA384, ED25519, ECDSA_SECP256R1_SHA256]);
    }

    #[test]
    fn test_peer_schemes_out_of_version() {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let supported = selector.peer_schemes(ProtocolVersion::Tls12, &[ED25519, ECDSA_SHA224]);
        assert_eq!(ids(&supported), vec![ECDSA_SHA224]);
    }

    #[test]
    fn test_preferable_scheme_matches_key_type() {
        let registry = registry();
        let candidates: Vec<_> = [ED25519, ECDSA_SECP384R1_SHA384, ECDSA_SECP256R1_SHA256]
            .iter()
            .filter_map(|id| registry.lookup_by_id(*id))
            .collect();
        let cert_scheme = registry.lookup_by_id(ECDSA_SECP256R1_SHA256).unwrap();
        let chosen = preferable_scheme(&candidates, &cert_scheme, ProtocolVersion::Tls13).unwrap();
        assert_eq!(chosen.id(), ECDSA_SECP384R1_SHA384);

        let rsa_cert = registry.lookup_by_id(RSA_PKCS1_SHA256).unwrap();
        assert!(preferable_scheme(&candidates, &rsa_cert, ProtocolVersion::Tls13).is_none());
        assert!(matches!(
            negotiate_verification_scheme(&candidates, &rsa_cert, ProtocolVersion::Tls13),
            Err(Error::NoMatchingScheme(_))
        ));
    }

    #[test]
    fn test_signer_skips_wrong_curve() {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let candidates = selector.supported_schemes(&[ProtocolVersion::Tls13]);
        let possession = Possession::new(PrivateKey::generate_p384());

        let (scheme, signer) = selector
            .signer_of_preferable_scheme(&candidates, &possession, ProtocolVersion::Tls13)
            .unwrap();
        assert_eq!(scheme.id(), ECDSA_SECP384R1_SHA384);
        assert_eq!(signer.algorithm(), "SHA384withECDSA");
    }

    #[test]
    fn test_legacy_ec_requires_supported_group() {
        let registry = registry();
        let legacy = vec![registry.lookup_by_id(ECDSA_SHA224).unwrap()];
        let possession = Possession::new(PrivateKey::generate_p256());

        let selector = SchemeSelector::new(&registry);
        assert!(selector
            .signer_of_preferable_scheme(&legacy, &possession, ProtocolVersion::Tls12)
            .is_some());

        let only_p384 =
            SupportedGroups::new(vec![crate::core::crypto::types::NamedGroup::Secp384r1]);
        let selector = selector.with_groups(&only_p384);
        assert!(selector
            .signer_of_preferable_scheme(&legacy, &possession, ProtocolVersion::Tls12)
            .is_none());
    }

    #[test]
    fn test_negotiate_signer_without_match() {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let candidates = selector.supported_schemes(&[ProtocolVersion::Tls13]);
        let possession = Possession::new(PrivateKey::generate_ed25519());

        // ed25519 is TLS 1.3 only
        let result = selector.negotiate_signer(&candidates, &possession, ProtocolVersion::Tls12);
        assert!(matches!(result, Err(Error::NoMatchingScheme(_))));
        let result = selector.negotiate_signer(&candidates, &possession, ProtocolVersion::Tls13);
        assert_eq!(result.map(|(scheme, _)| scheme.id()).ok(), Some(ED25519));
    }
}
