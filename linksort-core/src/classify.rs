use crate::UNKNOWN_DOMAIN;

/// Which bucket a hostname belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// The first configured domain the hostname contains.
    Known(&'a str),
    Unknown,
}

impl<'a> Classification<'a> {
    /// Bucket key, also the output file stem.
    pub fn key(&self) -> &'a str {
        match *self {
            Classification::Known(domain) => domain,
            Classification::Unknown => UNKNOWN_DOMAIN,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Classification::Known(_))
    }
}

/// Matches hostnames against the configured domains by substring containment.
///
/// Containment is not suffix anchoring: `example.com` also claims
/// `example.com.evil.org`. The first configured domain that matches wins.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    domains: Vec<String>,
}

impl DomainClassifier {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    pub fn classify(&self, hostname: &str) -> Classification<'_> {
        self.domains
            .iter()
            .find(|domain| hostname.contains(domain.as_str()))
            .map(|domain| Classification::Known(domain.as_str()))
            .unwrap_or(Classification::Unknown)
    }
}
