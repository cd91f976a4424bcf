use std::time::Duration;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use tracing::{error, info, warn};
use triage_core::config::TriageConfig;
use triage_core::paper::PaperRepository;
use triage_core::progress::ProgressStore;
use triage_core::review::{FinalizeReport, ReviewSession, SessionState, SessionStats};

use super::{load_config, paper_repository, progress_store};
use crate::GlobalArgs;
use crate::terminal::CrosstermTerminal;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let papers = paper_repository(&config)
        .load_accepted()
        .with_context(|| format!("Failed to load {}", config.metadata_file.display()))?;
    let store = progress_store(&config);
    let _lock = match store.lock() {
        Ok(lock) => lock,
        Err(e) if e.is_locked() => bail!("{} (is another review running?)", e),
        Err(e) => return Err(e.into()),
    };

    let progress = store.load();
    let mut session = ReviewSession::resume(&papers, &progress);
    info!(
        papers = papers.len(),
        start = session.start_cursor(),
        "starting review"
    );

    let outcome = if session.state().is_terminal() {
        if session.is_empty() {
            println!("{}", "No accepted papers found.".yellow());
        }
        Ok(session.state())
    } else {
        let mut terminal = CrosstermTerminal::enter(
            &config.keys,
            Duration::from_millis(config.feedback_delay_ms),
        )?;
        session.run(&mut terminal)
    };

    // Whatever happened on screen, keep the adds and position made so far
    let report = finalize_with_retries(&mut session, &store, &config)?;

    if session.state() == SessionState::Exhausted {
        println!("{}", "You reached the end of the list.".green());
    }
    println!("{}", summary_line(&report, session.stats(), session.len()));

    outcome.map(|_| ()).map_err(|e| {
        error!(error = %e, "review interrupted");
        anyhow::Error::new(e).context("Review interrupted")
    })
}

fn finalize_with_retries<S: ProgressStore + ?Sized>(
    session: &mut ReviewSession<'_>,
    store: &S,
    config: &TriageConfig,
) -> Result<FinalizeReport> {
    // The first attempt plus `save_retries` retries
    let attempts = config.save_retries.saturating_add(1);
    let mut last_error = None;

    for attempt in 1..=attempts {
        match session.finalize(store, &config.forum_url_base) {
            Ok(report) => return Ok(report),
            Err(e) => {
                warn!(attempt, attempts, error = %e, "failed to save progress");
                let retryable = e.is_persist();
                last_error = Some(e);
                if !retryable {
                    break;
                }
            }
        }
    }

    error!(
        attempts,
        pending = session.pending().len(),
        cursor = session.cursor(),
        "giving up on saving progress"
    );
    eprintln!("{}", "Failed to save progress. Unsaved state:".red().bold());
    for entry in session.unflushed_entries(&config.forum_url_base) {
        eprintln!("  {}", entry.to_line());
    }
    eprintln!("  last viewed: {}", session.cursor());

    match last_error {
        Some(e) => Err(e).context("Failed to save progress"),
        None => bail!("Failed to save progress"),
    }
}

fn summary_line(report: &FinalizeReport, stats: SessionStats, total: usize) -> String {
    format!(
        "Reviewed {} papers ({} added, {} skipped). {} new on the reading list. Progress saved at {}/{}.",
        stats.shown,
        stats.added,
        stats.skipped,
        report.appended.to_string().bold(),
        report.last_viewed,
        total
    )
}
