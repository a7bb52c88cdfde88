/// A normalized repository-relative file path.
///
/// Backslashes become `/`, `.` components and duplicate separators are
/// dropped, `..` pops the previous component (logical, no filesystem access).
/// This is the form hook filters are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoPath(pub(crate) String);

impl RepoPath {
    /// Normalize a path as listed by `git ls-files` or typed by a user.
    ///
    /// Only the line terminator is stripped; other whitespace can be part of
    /// a file name. Returns `None` when nothing is left after normalization
    /// (`""`, `"."`, `"./"`) or when `..` climbs above the repository root.
    pub fn new(raw: &str) -> Option<Self> {
        let unified = raw.trim_end_matches(['\r', '\n']).replace('\\', "/");

        let mut components: Vec<&str> = Vec::new();
        for part in unified.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    components.pop()?;
                }
                other => components.push(other),
            }
        }

        if components.is_empty() {
            None
        } else {
            Some(RepoPath(components.join("/")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
