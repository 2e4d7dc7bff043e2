use crate::platform::AccessibilityNode;
use crate::sensing::find_descendant;

use super::targets::SOCIAL_PROFILE_TAB;

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Top edge of the social app's profile tab, which is where the obscured
/// region ends. The tab bar does not move while the process lives, so the
/// first positive reading is kept for good.
#[derive(Debug, Default)]
pub struct ProfileTabCache {
    top: Option<i32>,
}

impl ProfileTabCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self) -> Option<i32> {
        self.top.filter(|top| *top > 0)
    }

    /// Cached top, or a fresh lookup in `source`; 0 when the tab is not in
    /// the snapshot.
    pub fn resolve<N: AccessibilityNode>(&mut self, source: Option<&N>) -> i32 {
        if let Some(top) = self.cached() {
            return top;
        }

        let Some(tab) = find_descendant(source, SOCIAL_PROFILE_TAB, "") else {
            return 0;
        };
        let bounds = tab.bounds();
        log_info!("Profile tab at {:?}", bounds);
        self.top = Some(bounds.top);
        bounds.top
    }
}
