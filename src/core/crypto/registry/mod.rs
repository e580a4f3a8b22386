/*!
Registry for signature schemes.

This module holds the fixed scheme table, the one-time availability check
and the id/name codec.
*/

pub mod definitions;
pub mod exclusion;
pub mod manager;
pub mod naming;

// Re-export registry manager functions
pub use definitions::{SCHEME_DEFINITIONS, SchemeDefinition, definition_of};
pub use exclusion::{HashFamilyExclusion, NoExclusion, SchemeExclusion};
pub use manager::{
    SchemeRegistry,
    SignatureScheme,
    all_schemes,
    global,
    initialize,
    install,
    is_initialized,
    lookup_by_id,
};
pub use naming::{algorithm_names, legacy_name, name_of_id};

/// Find a scheme by name in the process-wide registry, ignoring ASCII case
pub fn scheme_by_name(name: &str) -> Option<SignatureScheme> {
    global().scheme_by_name(name)
}
