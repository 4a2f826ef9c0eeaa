use clap::Parser;
use ripple_cli::commands::analyze::{self, AnalyzeExitCode};
use ripple_cli::commands::init::starter_config;
use ripple_cli::{Cli, OutputFormat};
use ripple_core::RippleConfig;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[output]
format = "markdown"

[[repos]]
name = "api"
path = "api"

[[repos]]
name = "frontend"
path = "frontend"

[[relations]]
from = "api"
to = "frontend"
via = "graphql-schema"
"#;

const API_IMPACTS: &str = r#"[
  {"component": "Query: getUsers", "file": "schema.graphql",
   "reasons": [{"type": "schema", "source": "schema.graphql", "description": "field removed"}]}
]"#;

const FRONTEND_IMPACTS: &str = r#"[
  {"component": "UserList", "file": "src/queries/getUsers.graphql",
   "reasons": [{"type": "direct", "source": "src/queries/getUsers.graphql", "description": "edited"}]}
]"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".ripple.toml"), CONFIG).unwrap();
    let impacts = dir.path().join("impacts");
    std::fs::create_dir_all(&impacts).unwrap();
    std::fs::write(impacts.join("api.json"), API_IMPACTS).unwrap();
    std::fs::write(impacts.join("frontend.json"), FRONTEND_IMPACTS).unwrap();
    dir
}

fn cli(dir: &Path, extra: &[&str]) -> Cli {
    let config = dir.join(".ripple.toml");
    let impacts = dir.join("impacts");
    let mut args = vec![
        "ripple".to_string(),
        "analyze".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--impacts-dir".to_string(),
        impacts.display().to_string(),
        "--format".to_string(),
        "json".to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::parse_from(args)
}

#[test]
fn test_analyze_from_impact_files() {
    let dir = workspace();
    let code = analyze::run(&cli(dir.path(), &[])).unwrap();
    assert_eq!(code, AnalyzeExitCode::Success);
}

#[test]
fn test_fail_on_cross_repo() {
    let dir = workspace();
    let code = analyze::run(&cli(dir.path(), &["--fail-on-cross-repo"])).unwrap();
    assert_eq!(code, AnalyzeExitCode::ThresholdExceeded);
}

#[test]
fn test_fail_on_breaking() {
    let dir = workspace();
    let code = analyze::run(&cli(dir.path(), &["--fail-on-breaking"])).unwrap();
    assert_eq!(code, AnalyzeExitCode::ThresholdExceeded);
}

#[test]
fn test_missing_impact_file_means_no_impacts() {
    let dir = workspace();
    std::fs::remove_file(dir.path().join("impacts").join("frontend.json")).unwrap();
    let code = analyze::run(&cli(dir.path(), &["--fail-on-cross-repo"])).unwrap();
    assert_eq!(code, AnalyzeExitCode::Success);
}

#[test]
fn test_invalid_relation_is_an_error() {
    let dir = workspace();
    let broken = CONFIG.replace("to = \"frontend\"", "to = \"mobile\"");
    std::fs::write(dir.path().join(".ripple.toml"), broken).unwrap();
    let err = analyze::run(&cli(dir.path(), &[])).unwrap_err();
    assert!(format!("{}", err).contains("mobile"));
}

#[test]
fn test_format_resolution() {
    let dir = workspace();
    let config = RippleConfig::from_file(&dir.path().join(".ripple.toml")).unwrap();

    let explicit = cli(dir.path(), &[]);
    assert_eq!(analyze::resolve_format(&explicit, &config), OutputFormat::Json);

    let from_config = Cli::parse_from(["ripple"]);
    assert_eq!(
        analyze::resolve_format(&from_config, &config),
        OutputFormat::Markdown
    );
}

#[test]
fn test_starter_config_is_valid() {
    let config = starter_config();
    assert_eq!(config.repos.len(), 3);
    assert!(config.validate().unwrap().is_empty());
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    ripple_cli::commands::init::run(Some(dir.path())).unwrap();

    let path = dir.path().join(".ripple.toml");
    let loaded = RippleConfig::from_file(&path).unwrap();
    assert_eq!(loaded.relations.len(), 2);

    std::fs::write(&path, "# edited\n").unwrap();
    ripple_cli::commands::init::run(Some(dir.path())).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# edited\n");
}
