//! Configuration loader with environment variable expansion
//!
//! Loads configuration from `.labdash.toml` in the project directory or the
//! user config directory.

use super::types::DashConfig;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid expansion pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.labdash.toml`
/// 2. User-level `~/.config/labdash/config.toml`
/// 3. Default configuration
///
/// Environment overrides apply on top of whichever source won.
pub fn load_config(project_dir: &Path) -> Result<DashConfig, ConfigError> {
    let project_config = project_dir.join(".labdash.toml");
    if project_config.exists() {
        return load_from_file(&project_config);
    }

    if let Some(user_config) = get_user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    Ok(apply_env_overrides(DashConfig::default(), env_lookup))
}

/// Get user config directory path
fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("labdash").join("config.toml"))
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<DashConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut config: DashConfig = toml::from_str(&content)?;

    expand_env_vars(&mut config, env_lookup)?;
    config = apply_env_overrides(config, env_lookup);

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Expand ${VAR} patterns in string values
fn expand_env_vars<F>(config: &mut DashConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_regex = Regex::new(r"\$\{([^}]+)\}")?;

    config.tenant_namespace = expand_string(&config.tenant_namespace, &env_regex, &lookup);
    if let Some(ref id) = config.session.id {
        config.session.id = Some(expand_string(id, &env_regex, &lookup));
    }
    if let Some(ref dir) = config.session.dir {
        let expanded = expand_string(&dir.to_string_lossy(), &env_regex, &lookup);
        config.session.dir = Some(PathBuf::from(expanded));
    }
    if let Some(ref file) = config.workspaces.file {
        let expanded = expand_string(&file.to_string_lossy(), &env_regex, &lookup);
        config.workspaces.file = Some(PathBuf::from(expanded));
    }
    if let Some(ref file) = config.workspaces.candidates_file {
        let expanded = expand_string(&file.to_string_lossy(), &env_regex, &lookup);
        config.workspaces.candidates_file = Some(PathBuf::from(expanded));
    }

    Ok(())
}

/// Expand environment variables in a single string
///
/// Unknown variables are left untouched.
fn expand_string<F>(s: &str, regex: &Regex, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    regex
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Apply environment variable overrides
///
/// - LABDASH_TENANT_NAMESPACE -> tenant_namespace
/// - LABDASH_SESSION_DIR -> session.dir
/// - LABDASH_WORKSPACES_FILE -> workspaces.file
fn apply_env_overrides<F>(mut config: DashConfig, lookup: F) -> DashConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ns) = lookup("LABDASH_TENANT_NAMESPACE").filter(|v| !v.is_empty()) {
        config.tenant_namespace = ns;
    }

    if let Some(dir) = lookup("LABDASH_SESSION_DIR").filter(|v| !v.is_empty()) {
        config.session.dir = Some(PathBuf::from(dir));
    }

    if let Some(file) = lookup("LABDASH_WORKSPACES_FILE").filter(|v| !v.is_empty()) {
        config.workspaces.file = Some(PathBuf::from(file));
    }

    config
}

/// Create a sample configuration file content
pub fn sample_config() -> &'static str {
    r#"# labdash configuration
# Place this file in your project root as .labdash.toml
# or in ~/.config/labdash/config.toml for global settings

tenant_namespace = "tenant-${USER}"

# Offer the "Load candidates" toggle under the workspace list
show_candidates = false

[session]
# One JSON file per session lives here
# dir = "/tmp/labdash/sessions"

[workspaces]
file = "workspaces.toml"
# Listed in the add-workspace pane while "Load candidates" is on
# candidates_file = "candidates.toml"
"#
}
