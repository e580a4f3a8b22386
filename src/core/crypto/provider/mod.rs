/*!
Cryptographic providers.

The registry and the selector only see the `CryptoProvider` trait; this
module holds the implementation that ships with the crate.
*/

pub mod rustcrypto;

pub use rustcrypto::RustCryptoProvider;
