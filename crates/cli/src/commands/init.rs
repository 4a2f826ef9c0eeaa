//! Initialize .ripple.toml configuration

use anyhow::Result;
use ripple_core::config::CONFIG_FILE_NAME;
use ripple_core::{RelationConfig, RelationKind, RepoConfig, RepoType, RippleConfig};
use std::path::{Path, PathBuf};

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!("⚠️  {} already exists at {:?}", CONFIG_FILE_NAME, config_path);
        return Ok(());
    }

    starter_config().save(&config_path)?;

    println!("✅ Created {} at {:?}", CONFIG_FILE_NAME, config_path);
    println!("\nPoint the [[repos]] entries at your checkouts, then run:");
    println!("  ripple");

    Ok(())
}

/// Example layout: a GraphQL API, its frontend, and a Go lambda on a queue
pub fn starter_config() -> RippleConfig {
    let mut config = RippleConfig::default();
    config.repos = vec![
        repo("api", "../api", RepoType::GraphqlApi),
        repo("frontend", "../frontend", RepoType::Frontend),
        repo("worker", "../worker", RepoType::GoLambda),
    ];
    config.relations = vec![
        RelationConfig::new("api", "frontend", RelationKind::GraphqlSchema)
            .with_patterns(["**/*.graphql"]),
        RelationConfig::new("api", "worker", RelationKind::Sqs),
    ];
    config
}

fn repo(name: &str, path: &str, repo_type: RepoType) -> RepoConfig {
    RepoConfig {
        name: name.to_string(),
        path: PathBuf::from(path),
        repo_type,
        ignore: Vec::new(),
    }
}
