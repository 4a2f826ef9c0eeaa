//! Main analyze command: diffing, local analysis, correlation and output

use anyhow::{bail, Result};
use colored::Colorize;
use ripple_core::analyzer::load_impacts_dir;
use ripple_core::{AnalysisResult, AnalyzerDispatcher, CrossRepoCorrelator, RepoImpacts, RippleConfig};
use std::time::Instant;
use tracing::debug;

use crate::output;
use crate::progress::Step;
use crate::OutputFormat;

/// Outcome of an analyze run, mapped to the process exit code by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeExitCode {
    Success,
    ThresholdExceeded,
}

pub fn run(cli: &crate::Cli) -> Result<AnalyzeExitCode> {
    let start = Instant::now();

    // ── 1. Config ────────────────────────────────────────────────
    let config = super::load_config(cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = resolve_format(cli, &config);
    debug!(
        config_dir = %config.config_dir.display(),
        format = ?format,
        "configuration loaded"
    );

    eprintln!(
        "{}",
        format!(
            "  ripple v{} — analyzing {} repositories",
            ripple_core::VERSION,
            config.repos.len()
        )
        .bold()
    );
    eprintln!();

    for warning in config.validate()? {
        eprintln!("  {}: {}", "warn".yellow(), warning);
    }
    if config.repos.is_empty() {
        bail!("no repositories configured; run `ripple init` to create .ripple.toml");
    }

    // ── 2. Local impacts ─────────────────────────────────────────
    let repos = collect_impacts(cli, &config)?;

    // ── 3. Correlation ───────────────────────────────────────────
    let step = Step::new("Correlating across repositories");
    let cross_repo = CrossRepoCorrelator::new()
        .glob_syntax(config.correlation.glob_syntax())
        .analyze(&config.relations, &repos);
    step.finish(format!(
        "{} relation(s), {} cross-repo impact(s)",
        config.relations.len(),
        cross_repo.len()
    ));

    let result = AnalysisResult::build(repos, cross_repo);

    // ── 4. Output ────────────────────────────────────────────────
    match format {
        OutputFormat::Json => println!("{}", output::json::render(&result)?),
        OutputFormat::Markdown => print!("{}", output::markdown::render(&result)),
        OutputFormat::Terminal => {
            eprintln!();
            print!(
                "{}",
                output::terminal::render(&result, config.output.max_impacts)
            );
            println!("  Time: {:.1}s", start.elapsed().as_secs_f64());
        }
    }

    Ok(exit_code(cli, &result))
}

// ── Helpers ──────────────────────────────────────────────────────

pub fn resolve_format(cli: &crate::Cli, config: &RippleConfig) -> OutputFormat {
    if let Some(f) = cli.format {
        return f;
    }
    match config.output.format.as_str() {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Terminal,
    }
}

pub fn exit_code(cli: &crate::Cli, result: &AnalysisResult) -> AnalyzeExitCode {
    let summary = &result.summary;
    if (cli.fail_on_cross_repo && summary.cross_repo_impacts > 0)
        || (cli.fail_on_breaking && summary.has_breaking_changes)
    {
        AnalyzeExitCode::ThresholdExceeded
    } else {
        AnalyzeExitCode::Success
    }
}

fn collect_impacts(cli: &crate::Cli, config: &RippleConfig) -> Result<Vec<RepoImpacts>> {
    if let Some(dir) = cli.impacts_dir.as_deref() {
        let step = Step::new(format!("Loading impacts from {}", dir.display()));
        let repos = config
            .repos
            .iter()
            .map(|repo| load_impacts_dir(dir, &repo.name))
            .collect::<Result<Vec<_>>>()?;
        step.finish(impact_summary(&repos));
        return Ok(repos);
    }

    let base = cli.base.as_deref().unwrap_or(&config.general.base_ref);
    let head = cli.head.as_deref().or(config.general.head_ref.as_deref());

    let step = Step::new(format!("Diffing repositories against {}", base));
    let results = AnalyzerDispatcher::new().scan_repos(config, base, head);

    let mut repos = Vec::with_capacity(results.len());
    for (repo, result) in config.repos.iter().zip(results) {
        match result {
            Ok(impacts) => repos.push(impacts),
            Err(e) => {
                step.warn(format!("{}: {:#}, treating as unchanged", repo.name, e));
                repos.push(RepoImpacts::new(repo.name.clone(), Vec::new()));
            }
        }
    }
    step.finish(impact_summary(&repos));

    Ok(repos)
}

fn impact_summary(repos: &[RepoImpacts]) -> String {
    let total: usize = repos.iter().map(|r| r.impacts.len()).sum();
    format!("{} impact(s) in {} repo(s)", total, repos.len())
}
