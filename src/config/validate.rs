//! Checks that serde cannot express: uniqueness and non-empty fields.

use std::collections::HashSet;

use super::repository::{HookInvocation, HookRepository};
use super::{Config, ConfigError};

/// Validate a deserialized config. Stops at the first violation.
pub(super) fn check(config: &Config) -> Result<(), ConfigError> {
    for (index, repo) in config.repos.iter().enumerate() {
        check_repository(index, repo)?;
    }
    Ok(())
}

fn check_repository(index: usize, repo: &HookRepository) -> Result<(), ConfigError> {
    let position = index + 1;
    if repo.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "repository #{position}: `repo` must not be empty"
        )));
    }
    if repo.revision.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "repository #{position} ({}): `rev` must not be empty",
            repo.url
        )));
    }

    let mut seen = HashSet::new();
    for hook in &repo.hooks {
        if hook.id.is_blank() {
            return Err(ConfigError::ValidationError(format!(
                "repository #{position} ({}): hook `id` must not be empty",
                repo.url
            )));
        }
        if !seen.insert(hook.id.as_str()) {
            return Err(ConfigError::DuplicateHookId {
                repo: repo.url.clone(),
                id: hook.id.clone(),
            });
        }
        check_dependencies(repo, hook)?;
    }
    Ok(())
}

fn check_dependencies(repo: &HookRepository, hook: &HookInvocation) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for dep in &hook.additional_dependencies {
        if dep.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} hook '{}': empty entry in additional_dependencies",
                repo.url, hook.id
            )));
        }
        if !seen.insert(dep.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "{} hook '{}': '{dep}' listed twice in additional_dependencies",
                repo.url, hook.id
            )));
        }
    }
    Ok(())
}
