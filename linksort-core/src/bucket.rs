use crate::error::{Result, SortError};
use indexmap::{IndexMap, IndexSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Source identifier -> URLs first seen in that source, in insertion order.
pub type FileBucket = IndexMap<String, IndexSet<String>>;

/// Every domain bucket of a run, keyed by domain key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketStore {
    buckets: IndexMap<String, FileBucket>,
}

/// Path of the JSON document for `domain` under `output_dir`.
pub fn bucket_path(output_dir: &Path, domain: &str) -> PathBuf {
    output_dir.join(format!("{}.json", domain))
}

impl BucketStore {
    /// A store where every key starts with an empty bucket.
    pub fn empty<I, S>(domain_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buckets = domain_keys
            .into_iter()
            .map(|key| (key.into(), FileBucket::new()))
            .collect();
        Self { buckets }
    }

    /// Seed the store. When `merge` is set each key is read back from
    /// `<output_dir>/<key>.json`; a missing file is an empty bucket, a file
    /// that is not `{ "source": ["url", ...] }` is an error.
    pub fn load(domain_keys: &[String], output_dir: &Path, merge: bool) -> Result<Self> {
        if !merge {
            return Ok(Self::empty(domain_keys.iter().cloned()));
        }

        let mut store = Self::default();
        for key in domain_keys {
            let path = bucket_path(output_dir, key);
            let bucket = match fs::read_to_string(&path) {
                Ok(content) => {
                    let bucket: FileBucket = serde_json::from_str(&content)
                        .map_err(|source| SortError::MalformedBucket {
                            path: path.clone(),
                            source,
                        })?;
                    info!("Merging {} sources from {}", bucket.len(), path.display());
                    bucket
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("No existing bucket at {}", path.display());
                    FileBucket::new()
                }
                Err(e) => return Err(SortError::io(path, e)),
            };
            store.buckets.insert(key.clone(), bucket);
        }
        Ok(store)
    }

    /// Add `url` under `domain` / `source`. Returns `false` when it was
    /// already there.
    pub fn record(&mut self, domain: &str, source: &str, url: &str) -> bool {
        let urls = self
            .buckets
            .entry(domain.to_string())
            .or_default()
            .entry(source.to_string())
            .or_default();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string());
        true
    }

    pub fn get(&self, domain: &str) -> Option<&FileBucket> {
        self.buckets.get(domain)
    }

    /// Total URLs stored across every bucket and source.
    pub fn url_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|bucket| bucket.values())
            .map(IndexSet::len)
            .sum()
    }

    /// Write each bucket as pretty JSON to `<output_dir>/<key>.json`,
    /// replacing whatever is there.
    pub fn flush(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.buckets.len());
        for (domain, bucket) in &self.buckets {
            let json =
                serde_json::to_string_pretty(bucket).map_err(|source| SortError::Serialize {
                    domain: domain.clone(),
                    source,
                })?;
            let path = bucket_path(output_dir, domain);
            fs::write(&path, json).map_err(|e| SortError::io(&path, e))?;
            debug!("Wrote {} sources to {}", bucket.len(), path.display());
            written.push(path);
        }
        Ok(written)
    }
}
