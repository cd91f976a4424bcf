use anyhow::Result;
use colored::Colorize;

use super::{load_config, progress_store};
use crate::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let store = progress_store(&config);
    let entries = store.read_entries()?;

    if entries.is_empty() {
        println!(
            "{} {}",
            "Reading list is empty:".yellow(),
            store.reading_list_path().display()
        );
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:>5}  {}\n       {}",
            entry.index.to_string().bright_black(),
            entry.title.bold(),
            entry.url.cyan()
        );
    }
    println!("\n{} papers on the reading list", entries.len());
    Ok(())
}
