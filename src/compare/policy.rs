use tracing::debug;

use super::types::ComparisonResult;
use crate::config::SelfMatchPolicy;

/// Whether `file_name` names the reference file itself.
///
/// Matching is by base name only; content is never consulted.
pub fn is_self_match(file_name: &str, reference_base: Option<&str>) -> bool {
    reference_base == Some(file_name)
}

/// Result reported for a self-match, or `None` when the policy drops it.
pub fn self_match_result(policy: SelfMatchPolicy, file_name: &str) -> Option<ComparisonResult> {
    debug!(file = %file_name, policy = ?policy, "Skipping self-comparison");
    match policy {
        SelfMatchPolicy::Zero => Some(ComparisonResult::self_match(file_name, Some(0.0))),
        SelfMatchPolicy::Null => Some(ComparisonResult::self_match(file_name, None)),
        SelfMatchPolicy::Skip => None,
    }
}
