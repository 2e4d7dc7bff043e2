use crate::platform::{AccessibilityNode, EventType, Rect, ServiceHost, UiEvent};
use crate::sensing::find_descendant;

use super::targets::{hide_targets, SOCIAL_REELS_TAB, SOCIAL_SEARCH_TAB};
use super::{DecisionEngine, Reaction};

const ENABLE_LOGS: bool = true;

use crate::log_info;

impl DecisionEngine {
    pub(super) fn on_social_event<H, N>(
        &mut self,
        host: &mut H,
        event: &UiEvent<'_, N>,
    ) -> Reaction
    where
        H: ServiceHost,
        N: AccessibilityNode,
    {
        match event.event_type {
            // Delivered ahead of the click, but several times per tap; the
            // throttle collapses the burst into one back action.
            EventType::ViewSelected => self.leave_forbidden_tab(host, event),
            EventType::WindowContentChanged => self.obscure_distractions(host, event),
            _ => Reaction::Ignored,
        }
    }

    fn leave_forbidden_tab<H, N>(&mut self, host: &mut H, event: &UiEvent<'_, N>) -> Reaction
    where
        H: ServiceHost,
        N: AccessibilityNode,
    {
        let search = find_descendant(event.source, SOCIAL_SEARCH_TAB, "");
        let reels = find_descendant(event.source, SOCIAL_REELS_TAB, "");
        if search.is_none() && reels.is_none() {
            return Reaction::Ignored;
        }

        self.throttle.record_acted(event.event_type, event.event_time);
        log_info!(
            "Going back: search tab {} or reels tab {} visible",
            search.is_some(),
            reels.is_some()
        );
        host.perform_global_back();
        Reaction::Back
    }

    /// Cover everything from the topmost distraction down to the tab bar, or
    /// uncover if none is on screen any more.
    fn obscure_distractions<H, N>(&mut self, host: &mut H, event: &UiEvent<'_, N>) -> Reaction
    where
        H: ServiceHost,
        N: AccessibilityNode,
    {
        self.dump_source("Looking for distractions in:", event.source);

        let mut topmost: Option<Rect> = None;
        for target in hide_targets(self.config.variant) {
            let Some(found) = find_descendant(event.source, target.view_id, target.needle) else {
                continue;
            };
            let r = found.bounds();
            // Zero height means the view is laid out but not on screen.
            if r.height() == 0 {
                continue;
            }
            log_info!("Distraction {} at {:?}", target.view_id, r);
            if topmost.map_or(true, |current| r.top < current.top) {
                topmost = Some(r);
            }
        }

        let Some(region) = topmost else {
            self.overlay.hide(host);
            return Reaction::HideOverlay;
        };

        self.throttle.record_acted(event.event_type, event.event_time);
        let bottom = self.profile_tab.resolve(event.source);
        let shown = self.overlay.show(host, region.top, bottom);
        Reaction::ShowOverlay {
            top: region.top,
            bottom,
            shown,
        }
    }
}
