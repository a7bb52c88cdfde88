//! Dry-run planning: which hooks would run, and against which files.
//!
//! Mirrors the external runner's selection loop without executing anything:
//! top-level filters first, then each hook's own `files`/`exclude`.

mod filter;

use serde::Serialize;

use crate::config::Config;
use crate::domain::{HookId, RepoPath};

pub use filter::eligible_files;

/// Selection options, as given on the command line.
#[derive(Debug, Default, Clone)]
pub struct PlanOptions {
    /// Hook ids to report as skipped (the runner's `SKIP` variable).
    /// Entries are trimmed and empty entries ignored.
    pub skip: Vec<String>,
    /// Restrict the plan to hooks with this id.
    pub hook: Option<String>,
}

/// The planned outcome for every selected hook, in config order.
#[derive(Debug, Serialize)]
pub struct RunPlan {
    pub fail_fast: bool,
    /// Number of input files that passed the top-level filters.
    pub eligible: usize,
    pub hooks: Vec<PlannedHook>,
}

/// A single hook's planned invocation.
#[derive(Debug, Serialize)]
pub struct PlannedHook {
    pub repo: String,
    pub rev: String,
    pub id: HookId,
    pub name: String,
    pub status: HookStatus,
    pub args: Vec<String>,
    /// Files the hook's filters selected.
    pub matched: usize,
    /// Files that would be appended to the command line. Empty when
    /// `pass_filenames` is false even if `matched` is non-zero.
    pub filenames: Vec<String>,
    pub require_serial: bool,
    pub verbose: bool,
}

/// What the runner would do with a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookStatus {
    Run,
    /// No file matched the hook's filters.
    NoFiles,
    /// Listed in `SKIP`.
    Skipped,
}

impl HookStatus {
    pub fn label(self) -> &'static str {
        match self {
            HookStatus::Run => "run",
            HookStatus::NoFiles => "no files to check",
            HookStatus::Skipped => "skipped",
        }
    }
}

/// Errors from plan construction.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PlanError {
    #[error("no hook with id '{0}' in the config")]
    #[diagnostic(code(plan::unknown_hook), help("run `list` to see the configured hook ids"))]
    UnknownHook(String),
}

impl RunPlan {
    /// Hooks that would actually be invoked.
    pub fn runnable(&self) -> impl Iterator<Item = &PlannedHook> {
        self.hooks.iter().filter(|h| h.status == HookStatus::Run)
    }
}

/// Build a run plan for `files` against the config.
///
/// Input paths are normalized (see [`RepoPath`]); duplicates are dropped
/// keeping first occurrence.
///
/// # Examples
///
/// ```
/// use pre_commit_config::config::Config;
/// use pre_commit_config::plan::{plan, HookStatus, PlanOptions};
///
/// let config = Config::parse(r#"
/// repos:
///   - repo: https://github.com/pre-commit/mirrors-mypy
///     rev: v1.8.0
///     hooks:
///       - id: mypy
///         exclude: ^tests/
/// "#).unwrap();
///
/// let plan = plan(&config, &["src/a.py", "tests/test_a.py"], &PlanOptions::default()).unwrap();
/// assert_eq!(plan.hooks[0].status, HookStatus::Run);
/// assert_eq!(plan.hooks[0].filenames, vec!["src/a.py"]);
/// ```
pub fn plan<S: AsRef<str>>(
    config: &Config,
    files: &[S],
    options: &PlanOptions,
) -> Result<RunPlan, PlanError> {
    if let Some(wanted) = &options.hook {
        if !config.hooks().any(|(_, hook)| hook.id == wanted.as_str()) {
            return Err(PlanError::UnknownHook(wanted.clone()));
        }
    }
    let skip: Vec<&str> = options
        .skip
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect();
    for id in &skip {
        if !config.hooks().any(|(_, hook)| hook.id == *id) {
            tracing::warn!(id = %id, "skip list names a hook that is not configured");
        }
    }

    let paths: Vec<RepoPath> = files.iter().filter_map(|f| RepoPath::new(f.as_ref())).collect();
    let eligible = eligible_files(config, &paths);
    tracing::debug!(
        input = files.len(),
        eligible = eligible.len(),
        "filtered input files"
    );

    let hooks = config
        .hooks()
        .filter(|(_, hook)| options.hook.as_deref().map_or(true, |id| hook.id == id))
        .map(|(repo, hook)| {
            let skipped = skip.iter().any(|id| hook.id == *id);
            let matched: Vec<&RepoPath> = if skipped {
                Vec::new()
            } else {
                filter::select_for_hook(hook, &eligible)
            };

            let status = if skipped {
                HookStatus::Skipped
            } else if matched.is_empty() {
                HookStatus::NoFiles
            } else {
                HookStatus::Run
            };

            let filenames = if status == HookStatus::Run && hook.pass_filenames() {
                matched.iter().map(|p| p.as_str().to_string()).collect()
            } else {
                Vec::new()
            };

            PlannedHook {
                repo: repo.url.clone(),
                rev: repo.revision.clone(),
                id: hook.id.clone(),
                name: hook.display_name().to_string(),
                status,
                args: hook.args.clone(),
                matched: matched.len(),
                filenames,
                require_serial: hook.require_serial(),
                verbose: hook.verbose(),
            }
        })
        .collect();

    Ok(RunPlan {
        fail_fast: config.fail_fast,
        eligible: eligible.len(),
        hooks,
    })
}
