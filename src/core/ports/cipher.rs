//! Content cipher port
//!
//! The encryption step applied to news content before it is stored.

/// Pluggable encryption capability
///
/// Implementations must say whether they are simulated so callers never
/// present placeholder output as real encryption.
pub trait ContentCipher: Send + Sync {
    /// Turn plaintext into the stored ciphertext
    fn encrypt(&self, plaintext: &str) -> anyhow::Result<String>;

    /// Short name of the scheme, shown to users
    fn scheme(&self) -> &'static str;

    /// Whether this cipher only simulates encryption
    fn is_simulated(&self) -> bool;
}
