//! Config document abstraction layer.
//!
//! `ConfigDocument` wraps `serde_yaml` so the rest of the config module never
//! touches YAML errors or locations directly. It separates the two failure
//! stages the loader reports: malformed YAML, then schema violations.

use miette::{NamedSource, SourceSpan};
use serde::de::DeserializeOwned;

use super::ConfigError;

/// YAML source text that is known to be well-formed, paired with a display
/// name (file path or `<input>`) for diagnostics.
#[derive(Debug)]
pub(super) struct ConfigDocument {
    name: String,
    source: String,
}

impl ConfigDocument {
    /// Check YAML syntax.
    ///
    /// Duplicate keys within one mapping are reported here too, since the
    /// document cannot be read unambiguously.
    pub(super) fn parse(name: &str, source: &str) -> Result<Self, ConfigError> {
        let doc = Self {
            name: name.to_string(),
            source: source.to_string(),
        };
        if let Err(e) = serde_yaml::from_str::<serde_yaml::Value>(source) {
            return Err(ConfigError::ParseError {
                message: e.to_string(),
                src: doc.named_source(),
                span: doc.span_of(&e),
            });
        }
        Ok(doc)
    }

    /// Load and syntax-check a config file.
    pub(super) fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    /// Deserialize the document into a typed schema.
    ///
    /// Any failure here is a schema violation: the YAML itself was valid.
    pub(super) fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_yaml::from_str(&self.source).map_err(|e| ConfigError::SchemaError {
            message: e.to_string(),
            src: self.named_source(),
            span: self.span_of(&e),
        })
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Single-character span at the error location, when `serde_yaml` knows it.
    fn span_of(&self, error: &serde_yaml::Error) -> Option<SourceSpan> {
        error
            .location()
            .map(|loc| SourceSpan::from((loc.index().min(self.source.len()), 1)))
    }
}
