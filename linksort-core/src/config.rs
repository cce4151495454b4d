use crate::UNKNOWN_DOMAIN;
use crate::error::{Result, SortError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "linksort.json";

/// Settings for one sort run. Built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortConfig {
    /// Known domains, matched by substring in this order.
    pub domains: Vec<String>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Start every bucket empty instead of merging with existing output.
    pub overwrite_output: bool,
    /// Keep `.txt` etc. on the source identifiers used as bucket keys.
    pub include_input_file_extension: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            overwrite_output: false,
            include_input_file_extension: false,
        }
    }
}

impl SortConfig {
    /// Read the config at `path`, falling back to defaults when it is absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| SortError::io(path, e))?;
            let config: SortConfig =
                serde_json::from_str(&content).map_err(|source| SortError::MalformedConfig {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Loaded configuration from {}", path.display());
            config
        } else {
            debug!("No config at {}, using defaults", path.display());
            SortConfig::default()
        };

        let config = config.expanded();
        config.validate()?;
        Ok(config)
    }

    /// Expand `~` in the directory paths and lowercase the domains, since
    /// parsed hosts are always lowercase.
    pub fn expanded(mut self) -> Self {
        for domain in &mut self.domains {
            *domain = domain.to_lowercase();
        }
        self.input_dir = expand_path(&self.input_dir);
        self.output_dir = expand_path(&self.output_dir);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for domain in &self.domains {
            if domain.trim().is_empty() {
                return Err(SortError::Config("domain entries must not be empty".into()));
            }
            if domain == UNKNOWN_DOMAIN {
                return Err(SortError::Config(format!(
                    "'{}' is reserved for unrecognized domains",
                    UNKNOWN_DOMAIN
                )));
            }
            if !seen.insert(domain.as_str()) {
                return Err(SortError::Config(format!("domain '{}' is listed twice", domain)));
            }
        }
        Ok(())
    }

    /// Every bucket key this config produces, configured domains first.
    pub fn domain_keys(&self) -> Vec<String> {
        let mut keys = self.domains.clone();
        keys.push(UNKNOWN_DOMAIN.to_string());
        keys
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
        None => path.to_path_buf(),
    }
}
