use std::collections::HashSet;

use crate::config::{Config, HookInvocation};
use crate::domain::RepoPath;

/// Files that pass the top-level `files`/`exclude` filters, in input order.
///
/// Repeated paths are kept once.
pub fn eligible_files<'a>(config: &Config, paths: &'a [RepoPath]) -> Vec<&'a RepoPath> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    paths
        .iter()
        .filter(|&p| seen.insert(p.as_str()))
        .filter(|p| config.is_eligible(p.as_str()))
        .collect()
}

/// Narrow eligible files down to what one hook's filters select.
pub(super) fn select_for_hook<'a>(
    hook: &HookInvocation,
    eligible: &[&'a RepoPath],
) -> Vec<&'a RepoPath> {
    eligible
        .iter()
        .copied()
        .filter(|p| hook.selects(p.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilePattern;

    fn paths(raw: &[&str]) -> Vec<RepoPath> {
        raw.iter().filter_map(|p| RepoPath::new(p)).collect()
    }

    fn as_strs<'a>(selected: &[&'a RepoPath]) -> Vec<&'a str> {
        selected.iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn no_top_level_filters_keeps_everything() {
        let config = Config::default();
        let input = paths(&["a.py", "docs/index.md"]);
        assert_eq!(
            as_strs(&eligible_files(&config, &input)),
            vec!["a.py", "docs/index.md"]
        );
    }

    #[test]
    fn top_level_exclude_drops_matches() {
        let config = Config {
            exclude: Some(FilePattern::new("^docs/").unwrap()),
            ..Default::default()
        };
        let input = paths(&["a.py", "docs/index.md", "src/docs/b.py"]);
        assert_eq!(
            as_strs(&eligible_files(&config, &input)),
            vec!["a.py", "src/docs/b.py"]
        );
    }

    #[test]
    fn top_level_files_restricts_before_exclude() {
        let config = Config {
            files: Some(FilePattern::new(r"\.py$").unwrap()),
            exclude: Some(FilePattern::new("^build/").unwrap()),
            ..Default::default()
        };
        let input = paths(&["a.py", "README.md", "build/gen.py"]);
        assert_eq!(as_strs(&eligible_files(&config, &input)), vec!["a.py"]);
    }

    #[test]
    fn duplicate_paths_kept_once() {
        let config = Config::default();
        let input = paths(&["a.py", "./a.py", "b.py"]);
        assert_eq!(
            as_strs(&eligible_files(&config, &input)),
            vec!["a.py", "b.py"]
        );
    }

    #[test]
    fn hook_filters_apply_on_top_of_eligible() {
        let hook = HookInvocation {
            exclude: Some(FilePattern::new("^tests/").unwrap()),
            ..HookInvocation::new("mypy")
        };
        let input = paths(&["src/a.py", "tests/test_a.py"]);
        let config = Config::default();
        let eligible = eligible_files(&config, &input);
        assert_eq!(as_strs(&select_for_hook(&hook, &eligible)), vec!["src/a.py"]);
    }
}
