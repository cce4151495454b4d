/// A candidate link found by the extractor, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'t> {
    /// Full matched text, including any trailing path or query.
    pub href: &'t str,
    /// The host-like capture between the optional `www.` and the boundary.
    pub hostname: &'t str,
}

/// A candidate that matched the pattern but failed strict URL parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub source: String,
    pub href: String,
}

impl BrokenLink {
    pub fn new(source: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            href: href.into(),
        }
    }
}
