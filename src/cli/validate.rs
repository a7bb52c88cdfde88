use std::path::Path;

use crate::config::Config;

/// Load and validate the config; print a one-line summary on success.
pub(super) fn run(path: &Path) -> miette::Result<()> {
    let config = Config::load(path)?;
    println!(
        "ok: {}, {}",
        super::count(config.repos.len(), "repository", "repositories"),
        super::count(config.hook_count(), "hook", "hooks")
    );
    Ok(())
}
