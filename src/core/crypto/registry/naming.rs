/*!
Bidirectional scheme id / name resolution.

Unknown identifiers get a TLS 1.2 style `<signature>_<hash>` name built
from the two bytes of the id, so peers' odd offers stay readable in logs.
*/

use crate::core::constants::legacy::{HASH_ALGORITHMS, SIGNATURE_ALGORITHMS};
use crate::core::crypto::registry::definitions::definition_of;
use crate::core::crypto::registry::manager::{SchemeRegistry, SignatureScheme};

/// Name of a scheme identifier, registered or not
pub fn name_of_id(id: u16) -> String {
    match definition_of(id) {
        Some(definition) => definition.name.to_string(),
        None => legacy_name(id),
    }
}

/// TLS 1.2 style name decoded from the id bytes
pub fn legacy_name(id: u16) -> String {
    let hash_index = (id >> 8) as usize;
    let signature_index = (id & 0xFF) as usize;

    let hash_name = match HASH_ALGORITHMS.get(hash_index) {
        Some(name) => name.to_string(),
        None => format!("UNDEFINED-HASH({})", hash_index),
    };
    let signature_name = match SIGNATURE_ALGORITHMS.get(signature_index) {
        Some(name) => name.to_string(),
        None => format!("UNDEFINED-SIGNATURE({})", signature_index),
    };

    format!("{}_{}", signature_name, hash_name)
}

/// Provider algorithm names of `schemes`, in order
pub fn algorithm_names<'a, I>(schemes: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a SignatureScheme>,
{
    schemes.into_iter().map(|scheme| scheme.algorithm()).collect()
}

impl SchemeRegistry {
    /// Find a scheme by name, ignoring ASCII case
    pub fn scheme_by_name(&self, name: &str) -> Option<SignatureScheme> {
        self.all()
            .iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(name))
            .copied()
    }

    /// Name of a scheme identifier, registered or not
    pub fn name_of_id(&self, id: u16) -> String {
        match self.lookup_by_id(id) {
            Some(scheme) => scheme.name().to_string(),
            None => legacy_name(id),
        }
    }
}
