// Console report text for a sort run

use crate::sort::{FileScan, SortCounters};
use linksort_scanner::BrokenLink;

/// `<file> has <n> links`
pub fn format_file_line(scan: &FileScan) -> String {
    format!("{} has {} links", scan.name, scan.matches)
}

pub fn format_summary(counters: &SortCounters) -> String {
    format!(
        "Calculated {} known domains, {} unknown domains and {} duplicates.",
        counters.known, counters.unknown, counters.duplicates
    )
}

pub fn broken_link_banner(total: usize) -> String {
    format!("--- FOUND {} BROKEN LINK(S) ---", total)
}

/// Each broken link preceded by the restated total. Empty when there are none.
pub fn generate_broken_link_report(links: &[BrokenLink]) -> String {
    let banner = broken_link_banner(links.len());
    let mut report = String::new();
    for link in links {
        report.push('\n');
        report.push_str(&banner);
        report.push('\n');
        report.push_str(&format!("{}: {}\n", link.source, link.href));
    }
    report
}
