/*!
Registry manager for signature schemes.

A `SchemeRegistry` pairs every static scheme definition with an
availability flag computed once from a `CryptoProvider`. After
construction nothing in it changes, so shared references can be read from
any number of handshakes without locking.
*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::core::constants::targets;
use crate::core::crypto::keys::{PrivateKey, PublicKey};
use crate::core::crypto::provider::RustCryptoProvider;
use crate::core::crypto::registry::definitions::{SCHEME_DEFINITIONS, SchemeDefinition};
use crate::core::crypto::registry::exclusion::{NoExclusion, SchemeExclusion};
use crate::core::crypto::traits::{CryptoProvider, Signer, Verifier};
use crate::core::crypto::types::{KeyAlgorithm, NamedGroup, ProtocolVersion, SignatureParams};
use crate::core::error::{Error, Result};

/// A registered signature scheme with its availability
#[derive(Clone, Copy)]
pub struct SignatureScheme {
    definition: &'static SchemeDefinition,
    available: bool,
}

impl SignatureScheme {
    /// 16-bit wire identifier
    pub fn id(&self) -> u16 {
        self.definition.id
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// Provider-facing signature algorithm
    pub fn algorithm(&self) -> &'static str {
        self.definition.algorithm
    }

    /// Compatible key type
    pub fn key_algorithm(&self) -> KeyAlgorithm {
        self.definition.key_algorithm
    }

    /// Signature parameters, if the algorithm needs any
    pub fn params(&self) -> Option<&'static SignatureParams> {
        self.definition.params.as_ref()
    }

    /// Curve the scheme is bound to
    pub fn named_group(&self) -> Option<NamedGroup> {
        self.definition.named_group
    }

    /// Minimum key length in bits, `None` when unbounded
    pub fn minimal_key_size(&self) -> Option<u32> {
        self.definition.minimal_key_size
    }

    /// Versions in which the scheme may be used
    pub fn supported_protocols(&self) -> &'static [ProtocolVersion] {
        self.definition.supported_protocols
    }

    /// Versions in which the scheme may sign handshake messages
    pub fn handshake_supported_protocols(&self) -> &'static [ProtocolVersion] {
        self.definition.handshake_supported_protocols
    }

    /// Whether the provider could instantiate the scheme at initialization
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Static definition backing this entry
    pub fn definition(&self) -> &'static SchemeDefinition {
        self.definition
    }

    /// Whether the scheme applies to `version` at all
    pub fn supports_protocol(&self, version: ProtocolVersion) -> bool {
        self.definition.supported_protocols.contains(&version)
    }

    /// Whether the scheme may sign handshake messages in `version`
    pub fn supports_handshake_protocol(&self, version: ProtocolVersion) -> bool {
        self.definition.handshake_supported_protocols.contains(&version)
    }

    /// Whether a key of at least `key_size` bits satisfies the scheme
    pub fn accepts_key_size(&self, key_size: u32) -> bool {
        self.definition
            .minimal_key_size
            .is_none_or(|minimal| key_size >= minimal)
    }

    /// Bind a fresh signer to `key`.
    ///
    /// Failure here only means this scheme cannot be used with this key;
    /// callers choosing among candidates move on to the next one.
    pub fn signer(
        &self,
        provider: &dyn CryptoProvider,
        key: &PrivateKey,
    ) -> Result<Box<dyn Signer>> {
        if !self.available {
            return Err(Error::UnsupportedAlgorithm(self.algorithm().to_string()));
        }
        provider
            .new_signer(self.algorithm(), self.params(), key)
            .map_err(|e| match e {
                Error::KeyIncompatible { .. } => e,
                other => Error::key_incompatible(self.name(), other.to_string()),
            })
    }

    /// Bind a fresh verifier to `key`.
    ///
    /// Returns `Ok(None)` for an unavailable scheme. Any provider failure is
    /// a hard `VerifierConstruction` error.
    pub fn verifier(
        &self,
        provider: &dyn CryptoProvider,
        key: &PublicKey,
    ) -> Result<Option<Box<dyn Verifier>>> {
        if !self.available {
            return Ok(None);
        }
        provider
            .new_verifier(self.algorithm(), self.params(), key)
            .map(Some)
            .map_err(|e| match e {
                Error::VerifierConstruction { .. } => e,
                other => Error::verifier_construction(self.name(), other.to_string()),
            })
    }
}

impl PartialEq for SignatureScheme {
    fn eq(&self, other: &Self) -> bool {
        self.definition.id == other.definition.id
    }
}

impl Eq for SignatureScheme {}

impl Hash for SignatureScheme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.definition.id.hash(state);
    }
}

impl fmt::Debug for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureScheme")
            .field("id", &format_args!("{:#06x}", self.definition.id))
            .field("name", &self.definition.name)
            .field("available", &self.available)
            .finish()
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition.name)
    }
}

/// Registry of signature schemes, frozen after construction
pub struct SchemeRegistry {
    schemes: Vec<SignatureScheme>,
    provider: Arc<dyn CryptoProvider>,
}

impl SchemeRegistry {
    /// Build the registry, probing `provider` once per scheme
    pub fn new(provider: Arc<dyn CryptoProvider>, exclusion: &dyn SchemeExclusion) -> Self {
        let schemes = SCHEME_DEFINITIONS
            .iter()
            .map(|definition| SignatureScheme {
                definition,
                available: check_availability(provider.as_ref(), exclusion, definition),
            })
            .collect();

        Self { schemes, provider }
    }

    /// Build the registry with no exclusions
    pub fn with_provider(provider: Arc<dyn CryptoProvider>) -> Self {
        Self::new(provider, &NoExclusion)
    }

    /// Provider the registry was checked against
    pub fn provider(&self) -> &dyn CryptoProvider {
        self.provider.as_ref()
    }

    /// Find a scheme by wire identifier
    pub fn lookup_by_id(&self, id: u16) -> Option<SignatureScheme> {
        self.schemes.iter().find(|scheme| scheme.id() == id).copied()
    }

    /// Every scheme in priority order
    pub fn all(&self) -> &[SignatureScheme] {
        &self.schemes
    }

    /// Available schemes in priority order
    pub fn available(&self) -> impl Iterator<Item = SignatureScheme> + '_ {
        self.schemes.iter().filter(|scheme| scheme.is_available()).copied()
    }

    /// Number of registered schemes
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Whether the registry holds no schemes
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Build a verifier for a negotiated scheme using the registry's provider
    pub fn verifier(
        &self,
        scheme: &SignatureScheme,
        key: &PublicKey,
    ) -> Result<Option<Box<dyn Verifier>>> {
        scheme.verifier(self.provider(), key)
    }
}

impl fmt::Debug for SchemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeRegistry")
            .field("schemes", &self.schemes)
            .finish_non_exhaustive()
    }
}

fn check_availability(
    provider: &dyn CryptoProvider,
    exclusion: &dyn SchemeExclusion,
    definition: &SchemeDefinition,
) -> bool {
    // A provider may know EC parameters without being able to sign with them
    if definition.key_algorithm == KeyAlgorithm::Ec && !provider.is_ec_available() {
        warn!(
            target: targets::REGISTRY,
            "Signature scheme {} disabled: elliptic curve support is unavailable",
            definition.name
        );
        return false;
    }

    if !provider.can_instantiate(definition.algorithm) {
        warn!(
            target: targets::REGISTRY,
            "Signature algorithm {} is not supported by the provider, disabling {}",
            definition.algorithm,
            definition.name
        );
        return false;
    }

    if exclusion.excludes(definition) {
        debug!(
            target: targets::REGISTRY,
            "Signature scheme {} disabled by exclusion predicate",
            definition.name
        );
        return false;
    }

    true
}

// Process-wide registry
static REGISTRY: OnceCell<SchemeRegistry> = OnceCell::new();

// Public API

/// Install `registry` as the process-wide registry.
///
/// Fails with `AlreadyInitialized` once any registry is in place,
/// including one created lazily by [`global`].
pub fn install(registry: SchemeRegistry) -> Result<&'static SchemeRegistry> {
    REGISTRY
        .try_insert(registry)
        .map_err(|_| Error::AlreadyInitialized)
}

/// Check `provider` and install the result as the process-wide registry
pub fn initialize(
    provider: Arc<dyn CryptoProvider>,
    exclusion: &dyn SchemeExclusion,
) -> Result<&'static SchemeRegistry> {
    if REGISTRY.get().is_some() {
        return Err(Error::AlreadyInitialized);
    }
    install(SchemeRegistry::new(provider, exclusion))
}

/// Get the process-wide registry, initializing it with the built-in
/// provider if nothing was installed first
pub fn global() -> &'static SchemeRegistry {
    REGISTRY.get_or_init(|| SchemeRegistry::with_provider(Arc::new(RustCryptoProvider::new())))
}

/// Whether the process-wide registry exists yet
pub fn is_initialized() -> bool {
    REGISTRY.get().is_some()
}

/// Find a scheme in the process-wide registry
pub fn lookup_by_id(id: u16) -> Option<SignatureScheme> {
    global().lookup_by_id(id)
}

/// List every scheme in the process-wide registry
pub fn all_schemes() -> &'static [SignatureScheme] {
    global().all()
}
