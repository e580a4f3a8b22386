/*!
Signature scheme configuration.

This module provides the allow-list of enabled signature schemes. An
empty list leaves every registered scheme eligible.
*/

use log::warn;

use crate::core::constants::{SIGNATURE_SCHEMES_ENV, targets};
use crate::core::crypto::registry::{
    SignatureScheme, definition_of, definitions::SCHEME_DEFINITIONS,
};
use crate::core::error::{Result, config_err};

/// Signature scheme configuration for an endpoint
///
/// Deserialized configurations go through the same id checks as
/// [`SignatureConfig::with_ids`] and must pass [`SignatureConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(try_from = "SignatureConfigRepr"))]
pub struct SignatureConfig {
    /// Enabled scheme ids in preference order; empty allows all
    signature_schemes: Vec<u16>,
    /// Names that did not resolve to a scheme
    #[cfg_attr(feature = "serde-support", serde(skip))]
    unrecognized: Vec<String>,
}

/// Serialized form of [`SignatureConfig`]
#[cfg(feature = "serde-support")]
#[derive(serde::Deserialize)]
struct SignatureConfigRepr {
    #[serde(default)]
    signature_schemes: Vec<u16>,
}

#[cfg(feature = "serde-support")]
impl TryFrom<SignatureConfigRepr> for SignatureConfig {
    type Error = crate::core::error::Error;

    fn try_from(repr: SignatureConfigRepr) -> Result<Self> {
        let config = Self::with_ids(repr.signature_schemes);
        config.validate()?;
        Ok(config)
    }
}

impl SignatureConfig {
    /// Configuration that allows every scheme
    pub const UNRESTRICTED: SignatureConfig = SignatureConfig {
        signature_schemes: Vec::new(),
        unrecognized: Vec::new(),
    };

    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow exactly the given scheme ids, in order. Unknown ids are ignored.
    pub fn with_ids<I: IntoIterator<Item = u16>>(ids: I) -> Self {
        let mut config = Self::default();
        for id in ids {
            match definition_of(id) {
                Some(_) if !config.signature_schemes.contains(&id) => {
                    config.signature_schemes.push(id)
                }
                Some(_) => {}
                None => config.unrecognized.push(format!("{:#06x}", id)),
            }
        }
        config
    }

    /// Allow the named schemes, in order.
    ///
    /// Names match case-insensitively; unknown names are logged and skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            match SCHEME_DEFINITIONS
                .iter()
                .find(|def| def.name.eq_ignore_ascii_case(name))
            {
                Some(def) if !config.signature_schemes.contains(&def.id) => {
                    config.signature_schemes.push(def.id)
                }
                Some(_) => {}
                None => {
                    warn!(
                        target: targets::CONFIG,
                        "Ignoring unsupported signature scheme name: {}", name
                    );
                    config.unrecognized.push(name.to_string());
                }
            }
        }
        config
    }

    /// Parse a comma-separated list of scheme names
    pub fn parse(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    /// Read the allow-list from the `TLS_SIGNATURE_SCHEMES` environment variable.
    ///
    /// An unset or blank variable yields an unrestricted configuration.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SIGNATURE_SCHEMES_ENV) {
            Ok(value) if value.trim().is_empty() => Ok(Self::default()),
            Ok(value) => {
                let config = Self::parse(value.trim_matches('"'));
                config.validate()?;
                Ok(config)
            }
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => config_err(format!("{}: {}", SIGNATURE_SCHEMES_ENV, e)),
        }
    }

    /// Validate the configuration.
    ///
    /// A list made only of unknown names would otherwise silently turn into
    /// "allow everything".
    pub fn validate(&self) -> Result<()> {
        if self.signature_schemes.is_empty() && !self.unrecognized.is_empty() {
            return config_err(format!("no supported signature scheme in {:?}", self.unrecognized));
        }
        Ok(())
    }

    /// Whether the allow-list is empty
    pub fn is_unrestricted(&self) -> bool {
        self.signature_schemes.is_empty()
    }

    /// Whether `scheme` passes the allow-list
    pub fn permits(&self, scheme: &SignatureScheme) -> bool {
        self.signature_schemes.is_empty() || self.signature_schemes.contains(&scheme.id())
    }

    /// Enabled scheme ids in order
    pub fn scheme_ids(&self) -> &[u16] {
        &self.signature_schemes
    }

    /// Entries that did not resolve to a scheme
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}
