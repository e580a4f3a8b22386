/*!
Protocol versions a signature scheme may apply to.
*/

use std::fmt;

/// SSL/TLS/DTLS protocol versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolVersion {
    /// SSL 3.0
    Ssl30,
    /// TLS 1.0
    Tls10,
    /// TLS 1.1
    Tls11,
    /// TLS 1.2
    Tls12,
    /// TLS 1.3
    Tls13,
    /// DTLS 1.0
    Dtls10,
    /// DTLS 1.2
    Dtls12,
}

impl ProtocolVersion {
    /// Every version up to and including TLS 1.3
    pub const PROTOCOLS_TO_13: &'static [ProtocolVersion] = &[
        ProtocolVersion::Tls13,
        ProtocolVersion::Tls12,
        ProtocolVersion::Tls11,
        ProtocolVersion::Tls10,
        ProtocolVersion::Ssl30,
        ProtocolVersion::Dtls12,
        ProtocolVersion::Dtls10,
    ];

    /// Every version up to and including TLS 1.2
    pub const PROTOCOLS_TO_12: &'static [ProtocolVersion] = &[
        ProtocolVersion::Tls12,
        ProtocolVersion::Tls11,
        ProtocolVersion::Tls10,
        ProtocolVersion::Ssl30,
        ProtocolVersion::Dtls12,
        ProtocolVersion::Dtls10,
    ];

    /// TLS 1.2 and TLS 1.3 (plus DTLS 1.2)
    pub const PROTOCOLS_12_13: &'static [ProtocolVersion] = &[
        ProtocolVersion::Tls13,
        ProtocolVersion::Tls12,
        ProtocolVersion::Dtls12,
    ];

    /// TLS 1.3 only
    pub const PROTOCOLS_OF_13: &'static [ProtocolVersion] = &[ProtocolVersion::Tls13];

    /// Wire identifier of the version
    pub fn id(&self) -> u16 {
        match self {
            ProtocolVersion::Ssl30 => 0x0300,
            ProtocolVersion::Tls10 => 0x0301,
            ProtocolVersion::Tls11 => 0x0302,
            ProtocolVersion::Tls12 => 0x0303,
            ProtocolVersion::Tls13 => 0x0304,
            ProtocolVersion::Dtls10 => 0xfeff,
            ProtocolVersion::Dtls12 => 0xfefd,
        }
    }

    /// Resolve a wire identifier
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            0x0300 => Some(ProtocolVersion::Ssl30),
            0x0301 => Some(ProtocolVersion::Tls10),
            0x0302 => Some(ProtocolVersion::Tls11),
            0x0303 => Some(ProtocolVersion::Tls12),
            0x0304 => Some(ProtocolVersion::Tls13),
            0xfeff => Some(ProtocolVersion::Dtls10),
            0xfefd => Some(ProtocolVersion::Dtls12),
            _ => None,
        }
    }

    /// Get the name of the version as a string
    pub fn name(&self) -> &'static str {
        match self {
            ProtocolVersion::Ssl30 => "SSLv3",
            ProtocolVersion::Tls10 => "TLSv1",
            ProtocolVersion::Tls11 => "TLSv1.1",
            ProtocolVersion::Tls12 => "TLSv1.2",
            ProtocolVersion::Tls13 => "TLSv1.3",
            ProtocolVersion::Dtls10 => "DTLSv1.0",
            ProtocolVersion::Dtls12 => "DTLSv1.2",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
