use crate::platform::{AccessibilityNode, EventType, ServiceHost, UiEvent};
use crate::sensing::find_descendant;

use super::targets::{
    MAPS_CARD_MAX_TOP, MAPS_CARD_MIN_TOP, MAPS_EXPLORE_CARD, MAPS_SWIPE_END_OFFSET,
    MAPS_SWIPE_START_OFFSET,
};
use super::{DecisionEngine, Reaction};

const ENABLE_LOGS: bool = true;

use crate::log_info;

impl DecisionEngine {
    /// Drag the explore panel back down as soon as it pops up.
    pub(super) fn on_maps_event<H, N>(&mut self, host: &mut H, event: &UiEvent<'_, N>) -> Reaction
    where
        H: ServiceHost,
        N: AccessibilityNode,
    {
        if event.event_type != EventType::WindowContentChanged {
            return Reaction::Ignored;
        }

        let Some(card) = find_descendant(event.source, MAPS_EXPLORE_CARD, "") else {
            return Reaction::Ignored;
        };
        let r = card.bounds();
        if !(MAPS_CARD_MIN_TOP..=MAPS_CARD_MAX_TOP).contains(&r.top) {
            return Reaction::Ignored;
        }

        self.throttle.record_acted(event.event_type, event.event_time);
        let dispatched = self.gestures.dispatch_vertical_swipe(
            host,
            r.center_x(),
            r.top + MAPS_SWIPE_START_OFFSET,
            r.top + MAPS_SWIPE_END_OFFSET,
        );
        log_info!("Dispatch gesture for maps: {}", dispatched);
        self.dump_source("Gesture because explore card is in source:", event.source);

        Reaction::Gesture { dispatched }
    }
}
