/*!
Constants for signature scheme negotiation.

Wire sizes, legacy naming tables and configuration keys.
*/

/// Size of a signature scheme identifier inside a TLS record, in bytes
pub const SIZE_IN_RECORD: usize = 2;

/// Environment variable holding a comma-separated list of enabled schemes
pub const SIGNATURE_SCHEMES_ENV: &str = "TLS_SIGNATURE_SCHEMES";

/// Legacy (TLS 1.2 `SignatureAndHashAlgorithm`) naming tables
pub mod legacy {
    /// Hash names indexed by the high byte of a scheme id
    pub const HASH_ALGORITHMS: [&str; 7] = [
        "none", "md5", "sha1", "sha224", "sha256", "sha384", "sha512",
    ];

    /// Signature names indexed by the low byte of a scheme id
    pub const SIGNATURE_ALGORITHMS: [&str; 4] = ["anonymous", "rsa", "dsa", "ecdsa"];

    /// High byte shared by every SHA-224 based scheme
    pub const SHA224_HASH_INDEX: u8 = 0x03;
}

/// Diagnostic targets for the `log` facade
pub mod targets {
    /// Registry initialization
    pub const REGISTRY: &str = "tls_sigschemes::registry";

    /// Filtering and preference selection
    pub const SELECTOR: &str = "tls_sigschemes::selector";

    /// Configuration loading
    pub const CONFIG: &str = "tls_sigschemes::config";
}
