pub mod error;
pub mod extractor;
pub mod result;
pub mod validator;
pub mod walker;

pub use error::ScanError;
pub use extractor::{URL_PATTERN, extract_links};
pub use result::{BrokenLink, LinkMatch};
pub use validator::normalize_link;
pub use walker::walk_files;
