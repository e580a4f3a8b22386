/*!
Named group resolution and local support.
*/

use std::borrow::Cow;

use crate::core::crypto::types::{EcParameters, NamedGroup};

/// Trait for resolving curve parameters and checking local group support
pub trait NamedGroupRegistry: Send + Sync {
    /// Resolve domain parameters to a named group
    fn group_of(&self, params: &EcParameters) -> Option<NamedGroup>;

    /// Whether the group is enabled locally
    fn is_supported(&self, group: NamedGroup) -> bool;
}

/// Ordered list of locally enabled named groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedGroups {
    groups: Cow<'static, [NamedGroup]>,
}

impl SupportedGroups {
    /// Every known group enabled, in default preference order
    pub const DEFAULT: SupportedGroups = SupportedGroups {
        groups: Cow::Borrowed(NamedGroup::ALL),
    };

    /// Enable exactly `groups`, in order
    pub fn new(groups: Vec<NamedGroup>) -> Self {
        Self {
            groups: Cow::Owned(groups),
        }
    }

    /// Enabled groups in preference order
    pub fn groups(&self) -> &[NamedGroup] {
        &self.groups
    }
}

impl Default for SupportedGroups {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl NamedGroupRegistry for SupportedGroups {
    fn group_of(&self, params: &EcParameters) -> Option<NamedGroup> {
        NamedGroup::from_oid(&params.oid).filter(|group| group.field_bits() == params.field_bits)
    }

    fn is_supported(&self, group: NamedGroup) -> bool {
        self.groups.contains(&group)
    }
}
