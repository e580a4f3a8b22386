/*!
Traits for the cryptographic provider seam.

The registry queries a provider once per scheme at initialization, and the
selector asks it for per-operation signers and verifiers afterwards.
*/

use crate::core::crypto::keys::{PrivateKey, PublicKey};
use crate::core::crypto::types::SignatureParams;
use crate::core::error::Result;

/// A signer bound to one private key and one algorithm.
///
/// Signers are used for a single signature and then dropped: `sign`
/// consumes the box. They are `Send` so a handshake can move between
/// threads, but deliberately not `Sync`.
pub trait Signer: Send {
    /// Provider algorithm this signer was created for
    fn algorithm(&self) -> &str;

    /// Feed message bytes
    fn update(&mut self, data: &[u8]);

    /// Produce the signature over everything fed so far
    fn sign(self: Box<Self>) -> Result<Vec<u8>>;
}

/// A verifier bound to one public key and one algorithm.
pub trait Verifier: Send {
    /// Provider algorithm this verifier was created for
    fn algorithm(&self) -> &str;

    /// Feed message bytes
    fn update(&mut self, data: &[u8]);

    /// Check `signature` over everything fed so far.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify
    /// and an error for one that cannot be decoded.
    fn verify(self: Box<Self>, signature: &[u8]) -> Result<bool>;
}

/// Trait for providers of signature primitives
pub trait CryptoProvider: Send + Sync {
    /// Whether a signer/verifier for `algorithm` can be created at all
    fn can_instantiate(&self, algorithm: &str) -> bool;

    /// Whether elliptic curve signatures are usable
    fn is_ec_available(&self) -> bool;

    /// Create a signer for `algorithm` bound to `key`
    fn new_signer(
        &self,
        algorithm: &str,
        params: Option<&SignatureParams>,
        key: &PrivateKey,
    ) -> Result<Box<dyn Signer>>;

    /// Create a verifier for `algorithm` bound to `key`
    fn new_verifier(
        &self,
        algorithm: &str,
        params: Option<&SignatureParams>,
        key: &PublicKey,
    ) -> Result<Box<dyn Verifier>>;
}
