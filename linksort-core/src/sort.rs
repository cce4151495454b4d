use crate::bucket::BucketStore;
use crate::classify::DomainClassifier;
use crate::config::SortConfig;
use crate::error::{Result, SortError};
use linksort_scanner::{BrokenLink, extract_links, normalize_link, walk_files};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Running totals for one sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCounters {
    /// New URLs recorded under a configured domain.
    pub known: usize,
    /// New URLs recorded under `unknown`.
    pub unknown: usize,
    /// Valid URLs that were already present and skipped.
    pub duplicates: usize,
}

impl SortCounters {
    pub fn recorded(&self) -> usize {
        self.known + self.unknown
    }
}

/// Per-file outcome of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    pub path: PathBuf,
    /// Path relative to the input directory, used on the console.
    pub name: String,
    /// Bucket key for URLs found in this file.
    pub source: String,
    /// Candidates matched by the pattern, valid or not.
    pub matches: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSummary {
    pub files: Vec<FileScan>,
    pub counters: SortCounters,
    pub broken_links: Vec<BrokenLink>,
}

impl SortSummary {
    pub fn total_matches(&self) -> usize {
        self.files.iter().map(|f| f.matches).sum()
    }
}

/// Callback invoked after each file is scanned
pub type SortProgressCallback = Arc<dyn Fn(&FileScan) + Send + Sync>;

/// Bucket key for a file: its name, with or without the extension.
pub fn source_id(path: &Path, include_extension: bool) -> String {
    let name = if include_extension {
        path.file_name()
    } else {
        path.file_stem()
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Create `path` and its parents. An existing directory is fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| SortError::io(path, e))
}

/// Owns the bucket store for the length of a run.
pub struct Sorter<'a> {
    config: &'a SortConfig,
    classifier: DomainClassifier,
    store: BucketStore,
}

impl<'a> Sorter<'a> {
    /// Seed the buckets (merging with prior output unless overwriting) and
    /// make sure the input and output directories exist.
    pub fn new(config: &'a SortConfig) -> Result<Self> {
        let merge = !config.overwrite_output;
        let store = BucketStore::load(&config.domain_keys(), &config.output_dir, merge)?;

        ensure_dir(&config.input_dir)?;
        ensure_dir(&config.output_dir)?;

        Ok(Self {
            config,
            classifier: DomainClassifier::new(config.domains.clone()),
            store,
        })
    }

    pub fn store(&self) -> &BucketStore {
        &self.store
    }

    /// Walk the input directory and record every link found.
    pub fn scan(&mut self, progress: Option<SortProgressCallback>) -> Result<SortSummary> {
        let config = self.config;
        info!("Scanning {}", config.input_dir.display());
        let mut summary = SortSummary::default();

        for path in walk_files(&config.input_dir) {
            let path = path?;
            let scan = self.scan_file(&path, &mut summary)?;
            if let Some(ref callback) = progress {
                callback(&scan);
            }
            summary.files.push(scan);
        }

        info!(
            "Scan complete: {} files, {} candidates, {} known, {} unknown, {} duplicates",
            summary.files.len(),
            summary.total_matches(),
            summary.counters.known,
            summary.counters.unknown,
            summary.counters.duplicates
        );
        Ok(summary)
    }

    /// Extract, validate, classify and record the links of one file.
    pub fn scan_file(&mut self, path: &Path, summary: &mut SortSummary) -> Result<FileScan> {
        let bytes = fs::read(path).map_err(|e| SortError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let name = path
            .strip_prefix(&self.config.input_dir)
            .unwrap_or(path)
            .display()
            .to_string();
        let source = source_id(path, self.config.include_input_file_extension);
        debug!("Scanning {} as '{}'", name, source);

        let mut matches = 0;
        for link in extract_links(&text) {
            matches += 1;

            let url = match normalize_link(link.href) {
                Ok(url) => url,
                Err(e) => {
                    warn!("Broken link in {}: {}", name, e);
                    summary.broken_links.push(BrokenLink::new(&name, link.href));
                    continue;
                }
            };

            let classification = self.classifier.classify(url.host_str().unwrap_or_default());
            if self
                .store
                .record(classification.key(), &source, url.as_str())
            {
                if classification.is_known() {
                    summary.counters.known += 1;
                } else {
                    summary.counters.unknown += 1;
                }
            } else {
                summary.counters.duplicates += 1;
            }
        }

        Ok(FileScan {
            path: path.to_path_buf(),
            name,
            source,
            matches,
        })
    }

    /// Persist every bucket to the output directory.
    pub fn flush(&self) -> Result<Vec<PathBuf>> {
        self.store.flush(&self.config.output_dir)
    }
}

/// Run the whole pipeline: seed, scan, flush.
pub fn execute_sort(
    config: &SortConfig,
    progress: Option<SortProgressCallback>,
) -> Result<SortSummary> {
    let mut sorter = Sorter::new(config)?;
    let summary = sorter.scan(progress)?;
    sorter.flush()?;
    Ok(summary)
}
