mod common;

use proptest::prelude::*;
use tls_sigschemes::{
    ProtocolVersion, SchemeRegistry, SchemeSelector, SignatureConfig, legacy_name, name_of_id,
};

use common::{MockProvider, all_algorithms, ids};

fn registry() -> SchemeRegistry {
    MockProvider::new(all_algorithms()).into_registry()
}

// Strategy for generating protocol versions
fn protocol_versions() -> impl Strategy<Value = ProtocolVersion> {
    prop_oneof![
        Just(ProtocolVersion::Ssl30),
        Just(ProtocolVersion::Tls10),
        Just(ProtocolVersion::Tls11),
        Just(ProtocolVersion::Tls12),
        Just(ProtocolVersion::Tls13),
        Just(ProtocolVersion::Dtls10),
        Just(ProtocolVersion::Dtls12),
    ]
}

// Strategy for generating registered scheme ids
fn registered_ids() -> impl Strategy<Value = u16> {
    let ids: Vec<u16> = registry().all().iter().map(|s| s.id()).collect();
    prop::sample::select(ids)
}

// Strategy for generating peer offers mixing registered and arbitrary ids
fn peer_offers() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(prop_oneof![registered_ids(), any::<u16>()], 0..16)
}

// Strategy for generating algorithms the provider supports
fn algorithm_subsets() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(all_algorithms(), 0..=all_algorithms().len())
}

fn is_subsequence(needle: &[u16], haystack: &[u16]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|id| rest.any(|candidate| candidate == id))
}

proptest! {
    #[test]
    fn test_lookup_matches_id(id in any::<u16>()) {
        let registry = registry();
        let matches = registry.all().iter().filter(|s| s.id() == id).count();
        prop_assert!(matches <= 1);
        if let Some(scheme) = registry.lookup_by_id(id) {
            prop_assert_eq!(scheme.id(), id);
        }
    }

    #[test]
    fn test_unknown_ids_use_legacy_names(id in any::<u16>()) {
        let registry = registry();
        match registry.lookup_by_id(id) {
            Some(scheme) => prop_assert_eq!(name_of_id(id), scheme.name()),
            None => {
                let name = name_of_id(id);
                prop_assert_eq!(&name, &legacy_name(id));
                prop_assert_eq!(name.matches('_').count(), 1);
            }
        }
    }

    #[test]
    fn test_name_roundtrip_any_case(id in registered_ids(), mask in any::<u64>()) {
        let registry = registry();
        let name: String = name_of_id(id)
            .chars()
            .enumerate()
            .map(|(i, c)| if mask >> (i % 64) & 1 == 1 { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(registry.scheme_by_name(&name).map(|s| s.id()), Some(id));
    }

    #[test]
    fn test_supported_schemes_follow_registry_order(
        algorithms in algorithm_subsets(),
        versions in prop::collection::vec(protocol_versions(), 0..4),
    ) {
        let registry = MockProvider::new(algorithms).into_registry();
        let selector = SchemeSelector::new(&registry);
        let supported = selector.supported_schemes(&versions);

        let order: Vec<u16> = registry.all().iter().map(|s| s.id()).collect();
        prop_assert!(is_subsequence(&ids(&supported), &order));
        for scheme in &supported {
            prop_assert!(scheme.is_available());
            prop_assert!(versions.iter().any(|v| scheme.supports_protocol(*v)));
        }
    }

    #[test]
    fn test_peer_schemes_keep_peer_order(
        offered in peer_offers(),
        version in protocol_versions(),
        allowed in prop::collection::vec(registered_ids(), 0..6),
    ) {
        let registry = registry();
        let config = SignatureConfig::with_ids(allowed);
        let selector = SchemeSelector::new(&registry).with_config(&config);
        let supported = selector.peer_schemes(version, &offered);

        prop_assert!(is_subsequence(&ids(&supported), &offered));
        for scheme in &supported {
            prop_assert!(scheme.supports_protocol(version));
            prop_assert!(config.permits(scheme));
        }
    }

    #[test]
    fn test_rsa_minimum_never_violated(
        bits in 0u32..2048,
        offered in prop::collection::vec(registered_ids(), 0..22),
        version in protocol_versions(),
    ) {
        let registry = registry();
        let selector = SchemeSelector::new(&registry);
        let candidates = common::schemes(&registry, &offered);
        let possession = tls_sigschemes::Possession::new(common::rsa_key(bits));

        let selected = selector.signer_of_preferable_scheme(&candidates, &possession, version);
        if let Some((scheme, _)) = selected {
            prop_assert!(scheme.minimal_key_size().is_none_or(|min| bits >= min));
            prop_assert!(scheme.supports_handshake_protocol(version));
            prop_assert_eq!(scheme.key_algorithm(), tls_sigschemes::KeyAlgorithm::Rsa);
        }
    }
}
