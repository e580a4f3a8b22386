/*!
Cryptographic components for signature scheme negotiation.

This module provides the scheme registry, the selection algorithms and
the seams to the cryptographic provider and the policy layer.
*/

// Scheme table, availability check and id/name codec
pub mod registry;

// Filtering and preference selection
pub mod selector;

// Allow-list configuration
pub mod config;

// Key material
pub mod keys;

// Built-in provider
pub mod provider;

// Collaborator traits
pub mod traits;

// Shared types
pub mod types;

// Re-export frequently used types
pub use config::SignatureConfig;
pub use keys::{ExternalKey, Possession, PrivateKey, PublicKey};
pub use provider::RustCryptoProvider;
pub use registry::{
    SchemeRegistry, SignatureScheme, global, initialize, install, lookup_by_id, name_of_id,
    scheme_by_name,
};
pub use selector::{
    SchemeSelector, SelectedSigner, negotiate_verification_scheme, preferable_scheme,
};
