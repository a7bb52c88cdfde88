use serde::{Deserialize, Serialize};

/// Identifier of a hook within its repository (e.g. `flake8`, `mypy`).
///
/// Kept verbatim from the config; surrounding whitespace is significant to the
/// external runner, so it is not trimmed here. Emptiness is checked by
/// validation, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookId(pub(crate) String);

impl HookId {
    pub fn new(raw: &str) -> Self {
        HookId(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl PartialEq<str> for HookId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HookId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
