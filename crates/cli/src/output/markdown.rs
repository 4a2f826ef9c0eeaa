//! Markdown report, suitable for a pull request comment

use ripple_core::{AnalysisResult, ImpactItem};

pub fn render(result: &AnalysisResult) -> String {
    let s = &result.summary;
    let mut out = String::from("## Ripple impact report\n\n");

    out.push_str(&format!(
        "**{}** impact(s) across **{}** repo(s) \u{00b7} **{}** cross-repo impact(s)\n\n",
        s.total_impacts, s.repos_with_impacts, s.cross_repo_impacts
    ));
    if s.has_breaking_changes {
        out.push_str("> ⚠️ Breaking changes detected\n\n");
    }

    for repo in result.repos.iter().filter(|r| !r.is_empty()) {
        out.push_str(&format!("### `{}`\n\n", repo.repo));
        out.push_str("| Component | File | Reasons |\n|---|---|---|\n");
        for item in &repo.impacts {
            out.push_str(&format!(
                "| {} | `{}` | {} |\n",
                escape(&item.component),
                location(item),
                escape(&reasons(item))
            ));
        }
        out.push('\n');
    }

    if !result.cross_repo.is_empty() {
        out.push_str("### Cross-repo impacts\n\n");
        out.push_str("| Source | Relation | Target | Components |\n|---|---|---|---|\n");
        for record in &result.cross_repo {
            let targets: Vec<&str> = record
                .target_components
                .iter()
                .map(String::as_str)
                .collect();
            out.push_str(&format!(
                "| `{}` \u{00b7} {} | {} | `{}` | {} |\n",
                record.source_repo,
                escape(&record.source_component),
                record.relation,
                record.target_repo,
                escape(&targets.join(", "))
            ));
        }
        out.push('\n');
    }

    out
}

fn location(item: &ImpactItem) -> String {
    match item.line {
        Some(line) => format!("{}:{}", item.file, line),
        None => item.file.clone(),
    }
}

fn reasons(item: &ImpactItem) -> String {
    item.reasons
        .iter()
        .map(|r| format!("{}: {}", r.kind, r.description))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
