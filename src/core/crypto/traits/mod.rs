/*!
Core traits at the seams of signature scheme negotiation.

This module defines the interfaces through which the registry and the
selector reach the cryptographic provider, the policy layer and the
named group registry.
*/

pub mod constraints;
pub mod groups;
pub mod provider;

// Re-export core traits for easier access
pub use constraints::{AlgorithmConstraints, DisabledAlgorithms, PermitAll};
pub use groups::{NamedGroupRegistry, SupportedGroups};
pub use provider::{CryptoProvider, Signer, Verifier};
