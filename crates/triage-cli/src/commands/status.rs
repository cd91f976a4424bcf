use anyhow::{Context, Result};
use colored::Colorize;
use triage_core::paper::PaperRepository;
use triage_core::progress::{Progress, ProgressStore};

use super::{load_config, paper_repository, progress_store};
use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let papers = paper_repository(&config)
        .load_accepted()
        .with_context(|| format!("Failed to load {}", config.metadata_file.display()))?;
    let progress = progress_store(&config).load();

    println!("{}", "Paper Triage".bright_magenta().bold());
    for line in status_lines(&progress, papers.len()) {
        println!("  {}", line);
    }
    Ok(())
}

/// Positions use the same 0-based `i/n` form as the review header.
fn status_lines(progress: &Progress, total: usize) -> Vec<String> {
    let resume = progress.resume_point(total);
    let mut lines = vec![
        format!("accepted papers : {}", total),
        format!("on reading list : {}", progress.added.len()),
        match progress.last_viewed {
            Some(marker) => format!("last viewed     : {}/{}", marker, total),
            None => "last viewed     : none".to_string(),
        },
    ];
    if total == 0 {
        return lines;
    }
    if resume >= total {
        lines.push("All papers reviewed.".green().to_string());
    } else {
        lines.push(format!("next paper      : {}/{}", resume, total));
    }
    lines
}
