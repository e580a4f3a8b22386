/*!
Injectable exclusion predicates applied once at registry initialization.

These cover provider-specific workarounds (a platform provider that
mishandles one hash family, say) without hardcoding them in the table.
*/

use crate::core::crypto::registry::definitions::SchemeDefinition;

/// Trait for predicates that disable schemes at initialization
pub trait SchemeExclusion: Send + Sync {
    /// Whether `definition` must be marked unavailable
    fn excludes(&self, definition: &SchemeDefinition) -> bool;
}

/// Exclude nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExclusion;

impl SchemeExclusion for NoExclusion {
    fn excludes(&self, _: &SchemeDefinition) -> bool {
        false
    }
}

/// Exclude every scheme whose identifier carries the given hash byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFamilyExclusion {
    hash_index: u8,
}

impl HashFamilyExclusion {
    /// Exclude schemes whose high id byte equals `hash_index`
    pub fn new(hash_index: u8) -> Self {
        Self { hash_index }
    }
}

impl SchemeExclusion for HashFamilyExclusion {
    fn excludes(&self, definition: &SchemeDefinition) -> bool {
        definition.hash_index() == self.hash_index
    }
}

impl<F> SchemeExclusion for F
where
    F: Fn(&SchemeDefinition) -> bool + Send + Sync,
{
    fn excludes(&self, definition: &SchemeDefinition) -> bool {
        self(definition)
    }
}
