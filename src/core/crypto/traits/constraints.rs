/*!
Algorithm constraints: externally supplied policy over algorithm names.
*/

use std::collections::HashSet;

use crate::core::crypto::types::{CryptoPrimitive, SignatureParams};

/// Trait for policy deciding whether an algorithm may be used
pub trait AlgorithmConstraints: Send + Sync {
    /// Whether `algorithm` may be used for every primitive in `primitives`
    fn permits(
        &self,
        primitives: &[CryptoPrimitive],
        algorithm: &str,
        params: Option<&SignatureParams>,
    ) -> bool;
}

/// Constraints that allow everything
#[derive(Debug, Clone, Copy, Default)]
pub struct PermitAll;

impl AlgorithmConstraints for PermitAll {
    fn permits(&self, _: &[CryptoPrimitive], _: &str, _: Option<&SignatureParams>) -> bool {
        true
    }
}

/// A deny-list of algorithm names and name components.
///
/// `SHA1withRSA` is rejected when the list holds `SHA1withRSA`, `SHA1` or
/// `RSA`, compared without regard to case.
#[derive(Debug, Clone, Default)]
pub struct DisabledAlgorithms {
    disabled: HashSet<String>,
}

impl DisabledAlgorithms {
    /// Create a deny-list from algorithm names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            disabled: names
                .into_iter()
                .map(|name| name.as_ref().trim().to_ascii_uppercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    /// Parse a comma-separated deny-list
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty()
    }

    fn is_disabled(&self, name: &str) -> bool {
        self.disabled.contains(&name.to_ascii_uppercase())
    }
}

/// Split `SHA256withECDSA`, `SHA256withRSAandMGF1` or `RSASSA-PSS` style
/// names into their components.
pub fn decompose(algorithm: &str) -> Vec<String> {
    let upper = algorithm.to_ascii_uppercase();
    let mut components = Vec::new();
    for part in upper.split("WITH") {
        for piece in part.split("AND") {
            for item in piece.split('/') {
                let item = item.trim();
                if !item.is_empty() {
                    components.push(item.to_string());
                }
            }
        }
    }
    // "SHA-256" and "SHA256" name the same digest
    let aliases: Vec<String> = components
        .iter()
        .filter(|c| c.starts_with("SHA") && c.contains('-'))
        .map(|c| c.replacen('-', "", 1))
        .collect();
    components.extend(aliases);
    components
}

impl AlgorithmConstraints for DisabledAlgorithms {
    fn permits(
        &self,
        _primitives: &[CryptoPrimitive],
        algorithm: &str,
        params: Option<&SignatureParams>,
    ) -> bool {
        if algorithm.is_empty() {
            return false;
        }
        if self.is_disabled(algorithm) {
            return false;
        }
        if decompose(algorithm).iter().any(|c| self.is_disabled(c)) {
            return false;
        }
        match params {
            Some(SignatureParams::Pss { hash, mgf_hash, .. }) => {
                !self.is_disabled(&hash.name().replacen('-', "", 1))
                    && !self.is_disabled(&mgf_hash.name().replacen('-', "", 1))
            }
            None => true,
        }
    }
}

impl<F> AlgorithmConstraints for F
where
    F: Fn(&[CryptoPrimitive], &str, Option<&SignatureParams>) -> bool + Send + Sync,
{
    fn permits(
        &self,
        primitives: &[CryptoPrimitive],
        algorithm: &str,
        params: Option<&SignatureParams>,
    ) -> bool {
        self(primitives, algorithm, params)
    }
}
