// Shared helpers for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use tls_sigschemes::{
    CryptoProvider, Error, ExternalKey, PrivateKey, PublicKey, Result, SchemeRegistry,
    SignatureParams, SignatureScheme, Signer, Verifier,
};

/// Provider that pretends to implement a fixed set of algorithms.
///
/// Signers echo a digest-free transcript so tests can check what was fed in.
pub struct MockProvider {
    pub algorithms: Vec<&'static str>,
    pub ec: bool,
    pub failing_signers: Vec<&'static str>,
    pub failing_verifiers: bool,
}

impl MockProvider {
    pub fn new(algorithms: Vec<&'static str>) -> Self {
        Self {
            algorithms,
            ec: true,
            failing_signers: Vec::new(),
            failing_verifiers: false,
        }
    }

    pub fn with_failing_signer(mut self, algorithm: &'static str) -> Self {
        self.failing_signers.push(algorithm);
        self
    }

    pub fn with_failing_verifiers(mut self) -> Self {
        self.failing_verifiers = true;
        self
    }

    pub fn without_ec(mut self) -> Self {
        self.ec = false;
        self
    }

    pub fn into_registry(self) -> SchemeRegistry {
        SchemeRegistry::with_provider(Arc::new(self))
    }
}

impl CryptoProvider for MockProvider {
    fn can_instantiate(&self, algorithm: &str) -> bool {
        self.algorithms.iter().any(|a| a.eq_ignore_ascii_case(algorithm))
    }

    fn is_ec_available(&self) -> bool {
        self.ec
    }

    fn new_signer(
        &self,
        algorithm: &str,
        _params: Option<&SignatureParams>,
        _key: &PrivateKey,
    ) -> Result<Box<dyn Signer>> {
        if self.failing_signers.iter().any(|a| *a == algorithm) {
            return Err(Error::Crypto(format!("{} rejected the key", algorithm)));
        }
        Ok(Box::new(EchoSigner {
            algorithm: algorithm.to_string(),
            data: Vec::new(),
        }))
    }

    fn new_verifier(
        &self,
        algorithm: &str,
        _params: Option<&SignatureParams>,
        _key: &PublicKey,
    ) -> Result<Box<dyn Verifier>> {
        if self.failing_verifiers {
            return Err(Error::InvalidKey(format!("{} cannot use this key", algorithm)));
        }
        Ok(Box::new(EchoVerifier {
            algorithm: algorithm.to_string(),
            data: Vec::new(),
        }))
    }
}

struct EchoSigner {
    algorithm: String,
    data: Vec<u8>,
}

impl Signer for EchoSigner {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    fn sign(self: Box<Self>) -> Result<Vec<u8>> {
        Ok(self.data)
    }
}

struct EchoVerifier {
    algorithm: String,
    data: Vec<u8>,
}

impl Verifier for EchoVerifier {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    fn verify(self: Box<Self>, signature: &[u8]) -> Result<bool> {
        Ok(self.data == signature)
    }
}

/// Every algorithm named in the registry
pub fn all_algorithms() -> Vec<&'static str> {
    let mut algorithms = Vec::new();
    for definition in tls_sigschemes::core::crypto::registry::SCHEME_DEFINITIONS.iter() {
        if !algorithms.contains(&definition.algorithm) {
            algorithms.push(definition.algorithm);
        }
    }
    algorithms
}

pub fn rsa_key(bits: u32) -> PrivateKey {
    PrivateKey::External(ExternalKey::new("RSA").with_bits(bits))
}

pub fn schemes(registry: &SchemeRegistry, ids: &[u16]) -> Vec<SignatureScheme> {
    ids.iter().filter_map(|id| registry.lookup_by_id(*id)).collect()
}

pub fn ids(schemes: &[SignatureScheme]) -> Vec<u16> {
    schemes.iter().map(|s| s.id()).collect()
}

/// Logger that keeps every record for later inspection
struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

pub fn init_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Whether a record at `level` on `target` mentions `needle`
pub fn logged(level: Level, target: &str, needle: &str) -> bool {
    LOGGER
        .records
        .lock()
        .map(|records| {
            records
                .iter()
                .any(|(l, t, m)| *l == level && t == target && m.contains(needle))
        })
        .unwrap_or(false)
}
