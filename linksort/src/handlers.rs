use anyhow::{Context, Result};
use colored::Colorize;
use linksort_core::clean::{clean, clean_all};
use linksort_core::config::SortConfig;
use linksort_core::report::{format_file_line, format_summary, generate_broken_link_report};
use linksort_core::sort::{FileScan, SortProgressCallback, SortSummary, Sorter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What a run does, picked from the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Sort,
    /// Remove the output directory
    Clean,
    /// Remove the input and output directories
    CleanAll,
}

impl RunMode {
    /// Case-insensitive. Anything that is not a maintenance command sorts.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::to_lowercase).as_deref() {
            Some("clean") => RunMode::Clean,
            Some("cleanall") => RunMode::CleanAll,
            _ => RunMode::Sort,
        }
    }
}

pub fn load_config(path: &Path) -> Result<SortConfig> {
    SortConfig::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

pub fn run(mode: RunMode, config: &SortConfig) -> Result<()> {
    match mode {
        RunMode::Sort => handle_sort(config).map(|_| ()),
        RunMode::Clean => handle_clean(config),
        RunMode::CleanAll => handle_clean_all(config),
    }
}

pub fn handle_sort(config: &SortConfig) -> Result<SortSummary> {
    let mut sorter = Sorter::new(config).context("Failed to prepare buckets")?;

    let progress: SortProgressCallback = Arc::new(|scan: &FileScan| {
        println!("{}", format_file_line(scan));
    });
    let summary = sorter
        .scan(Some(progress))
        .with_context(|| format!("Failed to scan {}", config.input_dir.display()))?;

    println!();
    println!("{} {}", "✓".green().bold(), format_summary(&summary.counters));

    if !summary.broken_links.is_empty() {
        eprint!("{}", generate_broken_link_report(&summary.broken_links).red());
    }

    let written = sorter
        .flush()
        .with_context(|| format!("Failed to write buckets to {}", config.output_dir.display()))?;
    tracing::info!(
        "Wrote {} bucket files holding {} links",
        written.len(),
        sorter.store().url_count()
    );

    Ok(summary)
}

pub fn handle_clean(config: &SortConfig) -> Result<()> {
    let removed = clean(config).context("Failed to remove output directory")?;
    print_removed(&removed);
    Ok(())
}

pub fn handle_clean_all(config: &SortConfig) -> Result<()> {
    let removed = clean_all(config).context("Failed to remove input and output directories")?;
    print_removed(&removed);
    Ok(())
}

fn print_removed(removed: &[PathBuf]) {
    if removed.is_empty() {
        println!("{} Nothing to remove", "→".blue());
    }
    for dir in removed {
        println!(
            "{} Removed {}",
            "✓".green().bold(),
            dir.display().to_string().bright_white()
        );
    }
}
