//! Configuration file parsing for .ripple.toml

use crate::pattern::GlobSyntax;
use crate::relation::RelationConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`RippleConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = ".ripple.toml";

/// Validation failures that make a configuration unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duplicate repository name '{0}'")]
    DuplicateRepo(String),

    #[error("relation {from} -> {to} references unknown repository '{repo}'")]
    UnknownRepo {
        from: String,
        to: String,
        repo: String,
    },
}

/// Main configuration structure for .ripple.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RippleConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub correlation: CorrelationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub repos: Vec<RepoConfig>,

    #[serde(default)]
    pub relations: Vec<RelationConfig>,

    /// Directory the config was loaded from; repo paths resolve against it
    #[serde(skip)]
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default diff base
    #[serde(default = "default_base_ref")]
    pub base_ref: String,

    /// Diff head; the working tree when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Escape regex metacharacters in relation patterns
    #[serde(default)]
    pub strict_globs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: terminal, json, markdown
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable color output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Max impacts listed per repository in terminal output (0 = unlimited)
    #[serde(default)]
    pub max_impacts: usize,
}

/// Kind of repository.
///
/// The built-in path analyzer treats every type alike; custom
/// [`LocalAnalyzer`](crate::analyzer::LocalAnalyzer)s read it in `supports`
/// to pick the repositories they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepoType {
    Frontend,
    GraphqlApi,
    GoLambda,
    Library,
    #[default]
    Other,
}

/// One repository taking part in the analysis (`[[repos]]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    pub name: String,

    /// Path to the repository, relative to the config file directory
    pub path: PathBuf,

    #[serde(default, rename = "type")]
    pub repo_type: RepoType,

    /// Glob patterns for files that never produce impacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,
}

// Default functions
fn default_base_ref() -> String {
    "main".to_string()
}

fn default_format() -> String {
    "terminal".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RippleConfig {
    fn default() -> Self {
        toml::from_str("").expect("empty TOML should parse to defaults")
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_ref: default_base_ref(),
            head_ref: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
            max_impacts: 0,
        }
    }
}

impl CorrelationConfig {
    pub fn glob_syntax(&self) -> GlobSyntax {
        if self.strict_globs {
            GlobSyntax::Strict
        } else {
            GlobSyntax::Lax
        }
    }
}

impl RippleConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: RippleConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(config)
    }

    /// Find and load .ripple.toml from the current directory or ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults rooted at the start directory
        let mut config = Self::default();
        config.config_dir = start_dir.to_path_buf();
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Absolute (or config-relative) location of a repository
    pub fn repo_path(&self, repo: &RepoConfig) -> PathBuf {
        if repo.path.is_absolute() {
            repo.path.clone()
        } else {
            self.config_dir.join(&repo.path)
        }
    }

    pub fn repo(&self, name: &str) -> Option<&RepoConfig> {
        self.repos.iter().find(|r| r.name == name)
    }

    /// Check repository names and relation endpoints.
    ///
    /// Returns warnings for relations of an unknown kind; those are kept and
    /// skipped at correlation time.
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        let mut names = HashSet::new();
        for repo in &self.repos {
            if !names.insert(repo.name.as_str()) {
                return Err(ConfigError::DuplicateRepo(repo.name.clone()));
            }
        }

        let mut warnings = Vec::new();
        for relation in &self.relations {
            for endpoint in [&relation.from, &relation.to] {
                if !names.contains(endpoint.as_str()) {
                    return Err(ConfigError::UnknownRepo {
                        from: relation.from.clone(),
                        to: relation.to.clone(),
                        repo: endpoint.clone(),
                    });
                }
            }
            if !relation.via.is_known() {
                warnings.push(format!(
                    "relation {} -> {} uses unknown kind '{}' and will be skipped",
                    relation.from, relation.to, relation.via
                ));
            }
        }

        Ok(warnings)
    }
}
