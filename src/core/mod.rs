//! Core components for signature scheme negotiation.
//!
//! This module contains the scheme registry, the selection algorithms,
//! the provider and policy seams, and error handling.

// Export cryptographic functionality
pub mod crypto;

// Protocol constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::constants::SIZE_IN_RECORD;
pub use self::error::{Error, Result};
