//! Opaque credential wrapper

use std::fmt;

/// A credential that never appears in `Debug` or `Display` output.
///
/// Only the HTTP clients call [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read the credential for an outgoing request
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
