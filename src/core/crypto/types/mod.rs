/*!
Core types for signature scheme negotiation.

This module provides the type definitions and enums shared by the
registry, the selector and the provider seam.
*/

pub mod algorithms;
pub mod groups;
pub mod protocol;

// Re-export core types for easier access
pub use algorithms::{CryptoPrimitive, HashAlgorithm, KeyAlgorithm, SignatureParams};
pub use groups::{EcParameters, NamedGroup};
pub use protocol::ProtocolVersion;
