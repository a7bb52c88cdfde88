//! Repository and hook entries of the `repos` list.

use serde::{Deserialize, Serialize};

use crate::domain::{FilePattern, HookId};

/// One `repos` entry: a hook source pinned to a revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookRepository {
    /// Repository URL (`repo` key).
    #[serde(rename = "repo")]
    pub url: String,
    /// Pinned tag or commit (`rev` key). Not resolved here.
    #[serde(rename = "rev")]
    pub revision: String,
    /// Hooks to use from this repository, in document order.
    pub hooks: Vec<HookInvocation>,
}

/// One `hooks` entry: which tool to run and how.
///
/// Optional booleans stay `None` when the key is absent so that writing the
/// config back does not invent keys; use the accessor methods for the
/// effective values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookInvocation {
    pub id: HookId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Extra packages installed into the hook environment. Treated as a set:
    /// duplicates are rejected by validation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<FilePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_serial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl HookRepository {
    /// Find a hook by id. Ids are unique within a validated repository.
    pub fn hook(&self, id: &str) -> Option<&HookInvocation> {
        self.hooks.iter().find(|h| h.id == id)
    }
}

impl HookInvocation {
    /// A hook with only an id set.
    pub fn new(id: &str) -> Self {
        HookInvocation {
            id: HookId::new(id),
            name: None,
            description: None,
            args: Vec::new(),
            additional_dependencies: Vec::new(),
            files: None,
            exclude: None,
            pass_filenames: None,
            require_serial: None,
            verbose: None,
        }
    }

    /// `name` if given, else the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn pass_filenames(&self) -> bool {
        self.pass_filenames.unwrap_or(true)
    }

    pub fn require_serial(&self) -> bool {
        self.require_serial.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    /// Whether this hook's own `files`/`exclude` filters select `path`.
    ///
    /// Absent `files` selects everything; absent `exclude` excludes nothing.
    pub fn selects(&self, path: &str) -> bool {
        crate::domain::selects(self.files.as_ref(), self.exclude.as_ref(), path)
    }
}
