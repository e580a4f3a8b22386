/*!
Elliptic curve named groups and domain parameters.
*/

use std::borrow::Cow;
use std::fmt;

/// Named groups a signature scheme or key may be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedGroup {
    /// NIST P-256
    Secp256r1,
    /// NIST P-384
    Secp384r1,
    /// NIST P-521
    Secp521r1,
    /// Curve25519 (key agreement only)
    X25519,
    /// Curve448 (key agreement only)
    X448,
}

impl NamedGroup {
    /// Every known group, in the default local preference order
    pub const ALL: &'static [NamedGroup] = &[
        NamedGroup::Secp256r1,
        NamedGroup::Secp384r1,
        NamedGroup::Secp521r1,
        NamedGroup::X25519,
        NamedGroup::X448,
    ];

    /// Wire identifier of the group
    pub fn id(&self) -> u16 {
        match self {
            NamedGroup::Secp256r1 => 0x0017,
            NamedGroup::Secp384r1 => 0x0018,
            NamedGroup::Secp521r1 => 0x0019,
            NamedGroup::X25519 => 0x001d,
            NamedGroup::X448 => 0x001e,
        }
    }

    /// Get the name of the group as a string
    pub fn name(&self) -> &'static str {
        match self {
            NamedGroup::Secp256r1 => "secp256r1",
            NamedGroup::Secp384r1 => "secp384r1",
            NamedGroup::Secp521r1 => "secp521r1",
            NamedGroup::X25519 => "x25519",
            NamedGroup::X448 => "x448",
        }
    }

    /// Object identifier of the curve
    pub fn oid(&self) -> &'static str {
        match self {
            NamedGroup::Secp256r1 => "1.2.840.10045.3.1.7",
            NamedGroup::Secp384r1 => "1.3.132.0.34",
            NamedGroup::Secp521r1 => "1.3.132.0.35",
            NamedGroup::X25519 => "1.3.101.110",
            NamedGroup::X448 => "1.3.101.111",
        }
    }

    /// Field size in bits
    pub fn field_bits(&self) -> u16 {
        match self {
            NamedGroup::Secp256r1 => 256,
            NamedGroup::Secp384r1 => 384,
            NamedGroup::Secp521r1 => 521,
            NamedGroup::X25519 => 255,
            NamedGroup::X448 => 448,
        }
    }

    /// Resolve a curve OID
    pub fn from_oid(oid: &str) -> Option<Self> {
        NamedGroup::ALL.iter().copied().find(|group| group.oid() == oid)
    }

    /// Resolve a wire identifier
    pub fn from_id(id: u16) -> Option<Self> {
        NamedGroup::ALL.iter().copied().find(|group| group.id() == id)
    }
}

impl fmt::Display for NamedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elliptic curve domain parameters as carried by a key or certificate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct EcParameters {
    /// Curve object identifier
    pub oid: Cow<'static, str>,
    /// Field size in bits
    pub field_bits: u16,
}

impl EcParameters {
    /// Domain parameters of a known named group
    pub fn for_group(group: NamedGroup) -> Self {
        Self {
            oid: Cow::Borrowed(group.oid()),
            field_bits: group.field_bits(),
        }
    }

    /// Domain parameters for an arbitrary (possibly unnamed) curve
    pub fn custom<S: Into<String>>(oid: S, field_bits: u16) -> Self {
        Self {
            oid: Cow::Owned(oid.into()),
            field_bits,
        }
    }
}

impl fmt::Display for EcParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bits)", self.oid, self.field_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_lookup() {
        for group in NamedGroup::ALL {
            assert_eq!(NamedGroup::from_oid(group.oid()), Some(*group));
            assert_eq!(NamedGroup::from_id(group.id()), Some(*group));
        }
        assert_eq!(NamedGroup::from_oid("1.3.132.0.10"), None);
    }

    #[test]
    fn test_params_for_group() {
        let params = EcParameters::for_group(NamedGroup::Secp384r1);
        assert_eq!(params.oid, "1.3.132.0.34");
        assert_eq!(params.field_bits, 384);
        assert_eq!(params, EcParameters::custom("1.3.132.0.34", 384));
    }
}
