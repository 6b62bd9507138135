use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;

/// Number of characters in a generated alias.
pub const ALIAS_LENGTH: usize = 7;

/// The short token used as a lookup key in place of the full URL.
///
/// Generated aliases are always [`ALIAS_LENGTH`] ASCII alphanumeric
/// characters. Lookups accept any string: a malformed alias is simply
/// never found in the store.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    pub fn new(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the alias has the shape produced by the generators.
    pub fn is_generated_form(&self) -> bool {
        self.0.len() == ALIAS_LENGTH && self.0.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Alias {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Alias {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Borrow<str> for Alias {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
