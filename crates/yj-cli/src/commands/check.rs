use std::path::Path;

use colored::Colorize;

use yj_reading::{IssueKind, ReadingConfig, validate_catalog};

pub fn run(dir: &Path) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("resource directory not found: {}", dir.display()));
    }
    let source = ReadingConfig::default().with_resources_dir(dir).source();
    let issues = validate_catalog(&source);

    if issues.is_empty() {
        println!("  {} all 64 records are valid", "ok".green().bold());
        return Ok(());
    }

    for issue in &issues {
        let line = issue.to_string();
        match issue.kind {
            IssueKind::Missing => eprintln!("  {}", line.yellow()),
            IssueKind::Malformed => eprintln!("  {}", line.red()),
        }
    }

    let missing = issues
        .iter()
        .filter(|i| i.kind == IssueKind::Missing)
        .count();
    Err(format!(
        "{} problem(s): {missing} missing, {} malformed",
        issues.len(),
        issues.len() - missing
    ))
}
