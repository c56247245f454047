//! Wrapper type for revealed network keys.
//!
//! SECURITY: The secret is zeroed on drop and never appears in Debug output.

use std::fmt;

/// A wireless network key revealed by a `key=clear` lookup.
///
/// SECURITY: This type never implements Display, and its Debug output is
/// redacted. The value lives only as long as the caller holds it; nothing in
/// this crate caches or logs it.
pub struct SecretString(String);

impl Clone for SecretString {
    fn clone(&self) -> Self {
        SecretString(self.0.clone())
    }
}

impl SecretString {
    /// Wrap a revealed key.
    pub fn new(secret: impl Into<String>) -> Self {
        SecretString(secret.into())
    }

    /// Get the secret as a string slice.
    ///
    /// Use this sparingly and only at the point the value is handed to a
    /// consumer (display row, export line).
    pub fn reveal(&self) -> &str {
        &self.0
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // Zero the memory
        // SAFETY: We own this String and are zeroing it before drop
        unsafe {
            let bytes = self.0.as_bytes_mut();
            for byte in bytes {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SECURITY: Never reveal the secret content
        write!(f, "SecretString(*** {} bytes ***)", self.0.len())
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}
