use crate::platform::AccessibilityNode;

const ENABLE_LOGS: bool = true;

use crate::log_debug;

/// First visible node under `source` carrying `view_id` whose text contains
/// `needle`. An empty needle matches any text, including none.
///
/// Visibility is filtered before text. When more than one node qualifies the
/// first in pre-order wins.
pub fn find_descendant<'a, N: AccessibilityNode>(
    source: Option<&'a N>,
    view_id: &str,
    needle: &str,
) -> Option<&'a N> {
    let source = source?;
    let candidates: Vec<&N> = source
        .find_by_view_id(view_id)
        .into_iter()
        .filter(|node| node.is_visible_to_user())
        .filter(|node| needle.is_empty() || node.text().unwrap_or("").contains(needle))
        .collect();

    if candidates.len() > 1 {
        log_debug!(
            "Multiple descendants with view ID {} ({} candidates), using the first",
            view_id,
            candidates.len()
        );
    }

    candidates.into_iter().next()
}
