use colored::Colorize;

pub mod bucket;
pub mod classify;
pub mod clean;
pub mod config;
pub mod error;
pub mod report;
pub mod sort;

pub use bucket::{BucketStore, FileBucket};
pub use classify::{Classification, DomainClassifier};
pub use config::SortConfig;
pub use error::SortError;
pub use sort::{SortCounters, SortSummary, Sorter, execute_sort};

/// Bucket key and file stem for URLs whose host matches no configured domain.
pub const UNKNOWN_DOMAIN: &str = "unknown";

pub fn print_banner() {
    println!(
        "{} {}",
        "linksort".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!("{}", "sort links into per-domain buckets".bright_black());
    println!();
}
