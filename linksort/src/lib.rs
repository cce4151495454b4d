// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{RunMode, handle_clean, handle_clean_all, handle_sort, load_config, run};

// Re-export report helpers from linksort-core
pub use linksort_core::report::{format_file_line, format_summary, generate_broken_link_report};
