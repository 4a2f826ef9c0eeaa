//! Terminal output formatting

use colored::Colorize;
use ripple_core::{AnalysisResult, CrossRepoImpact, ImpactItem, ReasonType};
use std::collections::BTreeSet;

/// Render a full result. `max_impacts` caps the items listed per repo (0 = all).
pub fn render(result: &AnalysisResult, max_impacts: usize) -> String {
    let mut out = String::new();

    for repo in &result.repos {
        if repo.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "  {} {}\n",
            repo.repo.bold(),
            format!("({} impact(s))", repo.impacts.len()).dimmed()
        ));

        let limit = if max_impacts == 0 {
            repo.impacts.len()
        } else {
            max_impacts
        };
        for item in repo.impacts.iter().take(limit) {
            out.push_str(&format_impact(item));
            out.push('\n');
        }
        if repo.impacts.len() > limit {
            out.push_str(&format!(
                "    {}\n",
                format!("… and {} more", repo.impacts.len() - limit).dimmed()
            ));
        }
        out.push('\n');
    }

    if !result.cross_repo.is_empty() {
        out.push_str(&format!("  {}\n", "Cross-repo impacts".bold()));
        for record in &result.cross_repo {
            out.push_str(&format_cross_repo(record));
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&format!("  {}\n", "\u{2500}".repeat(60).dimmed()));
    let s = &result.summary;
    out.push_str(&format!(
        "  {} in {} \u{00b7} {}",
        format!("{} impact(s)", s.total_impacts).green(),
        format!("{} repo(s)", s.repos_with_impacts),
        format!("{} cross-repo", s.cross_repo_impacts).yellow(),
    ));
    if s.has_breaking_changes {
        out.push_str(&format!(" \u{00b7} {}", "breaking changes".red().bold()));
    }
    out.push('\n');
    out
}

/// One impact line: icon, component, location, reason types
pub fn format_impact(item: &ImpactItem) -> String {
    let icon = if item.is_breaking() { "❌" } else { "•" };
    let location = match item.line {
        Some(line) => format!("{}:{}", item.file, line),
        None => item.file.clone(),
    };
    format!(
        "    {} {} {} [{}]",
        icon,
        item.component,
        location.dimmed(),
        reason_kinds(item)
    )
}

pub fn format_cross_repo(record: &CrossRepoImpact) -> String {
    let targets: Vec<&str> = record
        .target_components
        .iter()
        .map(String::as_str)
        .collect();
    format!(
        "    {}:{} \u{2500}{}\u{2192} {}: {}",
        record.source_repo.cyan(),
        record.source_component,
        record.relation.to_string().yellow(),
        record.target_repo.cyan(),
        targets.join(", ")
    )
}

fn reason_kinds(item: &ImpactItem) -> String {
    let kinds: BTreeSet<ReasonType> = item.reasons.iter().map(|r| r.kind).collect();
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
