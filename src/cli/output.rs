//! CLI output: summary formatting and error mapping to a stable surface.

use crate::error::MergeError;
use crate::merge::MergeSummary;
use serde_json::json;

/// Map domain errors to a string for CLI output.
/// Keeps the route thin; extend with stable categories if needed.
pub fn map_error(e: &MergeError) -> String {
    e.to_string()
}

/// Text summary: destination path first (the machine-readable line), then
/// skip details when the run was partial.
pub fn format_summary_text(summary: &MergeSummary) -> String {
    let mut out = format!("{}", summary.output.display());
    if summary.is_partial() {
        out.push_str(&format!(
            "\nmerged {} source(s), skipped {}:",
            summary.merged,
            summary.skipped.len()
        ));
        for skip in &summary.skipped {
            out.push_str(&format!("\n  {}: {}", skip.path.display(), skip.reason));
        }
    }
    out
}

/// JSON summary for scripted callers.
pub fn format_summary_json(summary: &MergeSummary) -> String {
    json!({
        "output": summary.output,
        "merged": summary.merged,
        "skipped": summary.skipped,
        "partial": summary.is_partial(),
    })
    .to_string()
}
