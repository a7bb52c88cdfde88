mod document;
mod repository;
mod validate;

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::domain::{FilePattern, HookId};
use document::ConfigDocument;

pub use repository::{HookInvocation, HookRepository};

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Top-level configuration loaded from a `.pre-commit-config.yaml` file.
///
/// Unknown keys at any level are rejected. Field order here is the key
/// order used when the config is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Paths matching this pattern are skipped by every hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,
    /// Only paths matching this pattern are considered by any hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<FilePattern>,
    /// Stop after the first failing hook.
    #[serde(default, skip_serializing_if = "is_false")]
    pub fail_fast: bool,
    pub repos: Vec<HookRepository>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Errors that can occur when loading, parsing, or writing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    #[diagnostic(
        code(config::not_found),
        help("pass --config or create .pre-commit-config.yaml")
    )]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    #[diagnostic(code(config::read))]
    ReadError(#[from] std::io::Error),
    #[error("invalid YAML syntax: {message}")]
    #[diagnostic(code(config::syntax))]
    ParseError {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },
    #[error("schema violation: {message}")]
    #[diagnostic(
        code(config::schema),
        help("top-level keys: exclude, files, fail_fast, repos; each repo needs repo, rev, hooks")
    )]
    SchemaError {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },
    #[error("duplicate hook id '{id}' in repository {repo}")]
    #[diagnostic(
        code(config::duplicate_hook),
        help("hook ids must be unique within one repository entry")
    )]
    DuplicateHookId { repo: String, id: HookId },
    #[error("invalid config: {0}")]
    #[diagnostic(code(config::invalid))]
    ValidationError(String),
    #[error("failed to serialize config: {0}")]
    #[diagnostic(code(config::serialize))]
    SerializeError(String),
}

impl Config {
    /// Load a config from a YAML file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");
        let doc = ConfigDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Parse a YAML string into a Config.
    ///
    /// Three stages, each with its own error: YAML syntax
    /// ([`ConfigError::ParseError`]), schema ([`ConfigError::SchemaError`]),
    /// and invariants such as unique hook ids per repository.
    ///
    /// # Examples
    ///
    /// ```
    /// use pre_commit_config::config::Config;
    ///
    /// let config = Config::parse(r#"
    /// repos:
    ///   - repo: https://github.com/psf/black
    ///     rev: 24.2.0
    ///     hooks:
    ///       - id: black
    ///         args: [--line-length=100]
    /// "#).unwrap();
    ///
    /// assert_eq!(config.repos.len(), 1);
    /// assert_eq!(config.repos[0].hooks[0].args, vec!["--line-length=100"]);
    /// ```
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::parse("<input>", content)?;
        Self::from_document(&doc)
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        let config: Config = doc.deserialize()?;
        validate::check(&config)?;
        tracing::debug!(
            source = doc.name(),
            repos = config.repos.len(),
            hooks = config.hook_count(),
            "config parsed"
        );
        Ok(config)
    }

    /// Serialize back to YAML.
    ///
    /// Absent optional keys and empty lists are omitted; comments and
    /// formatting of the original document are not preserved.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// All hooks with their repository, in document order.
    pub fn hooks(&self) -> impl Iterator<Item = (&HookRepository, &HookInvocation)> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)))
    }

    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|r| r.hooks.len()).sum()
    }

    /// Whether a path passes the top-level `files` and `exclude` filters.
    pub fn is_eligible(&self, path: &str) -> bool {
        crate::domain::selects(self.files.as_ref(), self.exclude.as_ref(), path)
    }
}
