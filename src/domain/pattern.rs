use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A compiled path filter from a `files` or `exclude` key.
///
/// Keeps the source text next to the compiled regex so the config can be
/// written back unchanged. Two patterns are equal when their source text is.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    regex: Regex,
}

impl FilePattern {
    /// Compile a pattern. Verbose-mode patterns (`(?x)...`) are accepted.
    pub fn new(raw: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(raw)?;
        Ok(FilePattern {
            raw: raw.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Search semantics: the pattern may match anywhere in the path.
    /// Anchor with `^`/`$` to match whole paths.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Apply a `files`/`exclude` pair to a path.
///
/// Absent `files` selects everything; absent `exclude` excludes nothing.
pub fn selects(files: Option<&FilePattern>, exclude: Option<&FilePattern>, path: &str) -> bool {
    let included = files.map_or(true, |p| p.is_match(path));
    let excluded = exclude.is_some_and(|p| p.is_match(path));
    included && !excluded
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for FilePattern {}

impl std::fmt::Display for FilePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for FilePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FilePattern::new(&raw)
            .map_err(|e| serde::de::Error::custom(format!("invalid regex '{raw}': {e}")))
    }
}
