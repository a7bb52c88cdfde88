use std::io::{IsTerminal, Read};
use std::path::Path;

use miette::IntoDiagnostic;

use crate::config::Config;
use crate::plan::{self, HookStatus, PlanOptions, PlannedHook, RunPlan};

/// Print the dry-run plan for the given files.
///
/// With no file arguments, paths are read one per line from stdin
/// (e.g. `git ls-files | pre-commit-config plan`). An interactive stdin
/// counts as an empty list.
pub(super) fn run(
    path: &Path,
    options: PlanOptions,
    files: Vec<String>,
    json: bool,
) -> miette::Result<()> {
    let config = Config::load(path)?;
    let files = if files.is_empty() {
        read_stdin_files()?
    } else {
        files
    };

    let plan = plan::plan(&config, files.as_slice(), &options)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plan).into_diagnostic()?);
    } else {
        print!("{}", render_text(&plan, files.len()));
    }
    Ok(())
}

fn read_stdin_files() -> miette::Result<Vec<String>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let mut input = String::new();
    stdin.read_to_string(&mut input).into_diagnostic()?;
    Ok(input
        .lines()
        .filter(|line| !line.trim_end_matches('\r').is_empty())
        .map(String::from)
        .collect())
}

fn render_text(plan: &RunPlan, input: usize) -> String {
    let mut out = format!(
        "{} of {} eligible\n",
        plan.eligible,
        super::count(input, "file", "files")
    );
    if plan.fail_fast {
        out.push_str("fail_fast: stops at the first failing hook\n");
    }
    let width = plan
        .hooks
        .iter()
        .map(|h| h.name.chars().count())
        .max()
        .unwrap_or(0);
    for hook in &plan.hooks {
        out.push_str(&format!("{:<width$}  {}\n", hook.name, describe(hook)));
    }
    out
}

fn describe(hook: &PlannedHook) -> String {
    match hook.status {
        HookStatus::Run if hook.filenames.is_empty() => {
            format!("run ({} matched, no filenames passed)", hook.matched)
        }
        HookStatus::Run => format!("run ({})", super::count(hook.matched, "file", "files")),
        status => status.label().to_string(),
    }
}
