use std::path::Path;

use miette::IntoDiagnostic;
use serde::Serialize;

use crate::config::Config;

/// One hook as printed by `list --json`.
#[derive(Debug, Serialize)]
struct ListedHook<'a> {
    repo: &'a str,
    rev: &'a str,
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    args: &'a [String],
    additional_dependencies: &'a [String],
}

pub(super) fn run(path: &Path, json: bool) -> miette::Result<()> {
    let config = Config::load(path)?;
    if json {
        let hooks: Vec<ListedHook<'_>> = config
            .hooks()
            .map(|(repo, hook)| ListedHook {
                repo: &repo.url,
                rev: &repo.revision,
                id: hook.id.as_str(),
                name: hook.display_name(),
                description: hook.description.as_deref(),
                args: &hook.args,
                additional_dependencies: &hook.additional_dependencies,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hooks).into_diagnostic()?);
    } else {
        print!("{}", render_text(&config));
    }
    Ok(())
}

fn render_text(config: &Config) -> String {
    let mut out = String::new();
    for repo in &config.repos {
        out.push_str(&format!("{} @ {}\n", repo.url, repo.revision));
        if repo.hooks.is_empty() {
            out.push_str("  (no hooks)\n");
        }
        for hook in &repo.hooks {
            match &hook.description {
                Some(description) => out.push_str(&format!("  {} - {description}\n", hook.id)),
                None => out.push_str(&format!("  {}\n", hook.id)),
            }
        }
    }
    out
}
