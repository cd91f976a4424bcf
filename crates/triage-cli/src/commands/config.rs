use anyhow::{Context, Result};
use colored::Colorize;

use super::{config_service, load_config};
use crate::GlobalArgs;

pub fn init(global: &GlobalArgs, force: bool) -> Result<()> {
    let service = config_service(global)?;
    let written = service
        .init(force)
        .with_context(|| format!("Failed to write {}", service.path().display()))?;

    if written {
        println!(
            "{} {}",
            "Wrote default configuration to".green(),
            service.path().display()
        );
    } else {
        println!(
            "{} {} (use --force to overwrite)",
            "Configuration already exists at".yellow(),
            service.path().display()
        );
    }
    Ok(())
}

pub fn show(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
