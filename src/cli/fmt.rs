use std::path::Path;

use crate::config::Config;

/// Print the canonical YAML form of the config.
///
/// Comments and quoting of the original file are not kept.
pub(super) fn run(path: &Path) -> miette::Result<()> {
    let config = Config::load(path)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
