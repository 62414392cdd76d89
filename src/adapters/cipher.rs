//! Placeholder content cipher
//!
//! NOT ENCRYPTION. Content is base64-encoded behind an `FHE-` tag so the
//! storage layout matches what a real homomorphic scheme would produce.
//! Anyone can read it back with [`PlaceholderCipher::reveal`].

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::core::ports::ContentCipher;

/// Tag prepended to placeholder ciphertext
pub const PLACEHOLDER_TAG: &str = "FHE-";

/// Base64 stand-in for homomorphic encryption
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCipher;

impl PlaceholderCipher {
    /// Decode placeholder ciphertext back to its plaintext
    ///
    /// Returns `None` for anything this cipher did not produce.
    #[must_use]
    pub fn reveal(ciphertext: &str) -> Option<String> {
        let encoded = ciphertext.strip_prefix(PLACEHOLDER_TAG)?;
        let bytes = STANDARD.decode(encoded).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl ContentCipher for PlaceholderCipher {
    fn encrypt(&self, plaintext: &str) -> anyhow::Result<String> {
        Ok(format!("{PLACEHOLDER_TAG}{}", STANDARD.encode(plaintext)))
    }

    fn scheme(&self) -> &'static str {
        "fhe-placeholder"
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
