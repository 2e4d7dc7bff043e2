//! Per-event-type throttle. The host delivers some events several times for a
//! single user action; only the first one inside the window is acted on.

use std::collections::HashMap;

use crate::platform::EventType;

const ENABLE_LOGS: bool = false;

use crate::log_debug;

pub const THROTTLE_WINDOW_MS: i64 = 500;

/// Last acted-on time per event type, in epoch milliseconds.
///
/// Only `record_acted` moves an entry forward, so a burst of events that get
/// inspected but not acted on never extends the window.
#[derive(Debug)]
pub struct EventThrottle {
    window_ms: i64,
    last_acted: HashMap<EventType, i64>,
}

impl Default for EventThrottle {
    fn default() -> Self {
        Self::new(THROTTLE_WINDOW_MS)
    }
}

impl EventThrottle {
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            last_acted: HashMap::new(),
        }
    }

    /// False while `event_time` is within the window of the last acted-on
    /// event of the same type. A type never acted on always passes.
    pub fn should_act(&self, event_type: EventType, event_time: i64) -> bool {
        let Some(last) = self.last_acted(event_type) else {
            return true;
        };
        let elapsed = event_time.saturating_sub(last);
        let act = elapsed >= self.window_ms;
        if !act {
            log_debug!(
                "Throttled {:?} at {} ({}ms after last action)",
                event_type,
                event_time,
                elapsed
            );
        }
        act
    }

    pub fn record_acted(&mut self, event_type: EventType, event_time: i64) {
        let entry = self.last_acted.entry(event_type).or_insert(event_time);
        *entry = (*entry).max(event_time);
    }

    pub fn last_acted(&self, event_type: EventType) -> Option<i64> {
        self.last_acted.get(&event_type).copied()
    }

    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000_000;

    #[test]
    fn first_event_of_a_type_is_never_throttled() {
        let throttle = EventThrottle::default();
        assert!(throttle.should_act(EventType::ViewSelected, T));
        assert!(throttle.should_act(EventType::ViewSelected, 0));
        assert_eq!(throttle.last_acted(EventType::ViewSelected), None);
    }

    #[test]
    fn events_inside_the_window_are_suppressed() {
        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::ViewSelected, T);
        assert!(!throttle.should_act(EventType::ViewSelected, T));
        assert!(!throttle.should_act(EventType::ViewSelected, T + 499));
    }

    #[test]
    fn exact_window_boundary_acts_again() {
        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::ViewSelected, T);
        assert!(throttle.should_act(EventType::ViewSelected, T + 500));
    }

    #[test]
    fn types_are_throttled_independently() {
        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::WindowContentChanged, T);
        assert!(throttle.should_act(EventType::WindowsChanged, T + 1));
        assert!(throttle.should_act(EventType::ViewSelected, T + 1));
        assert!(!throttle.should_act(EventType::WindowContentChanged, T + 1));
    }

    #[test]
    fn checking_without_recording_does_not_extend_the_window() {
        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::ViewSelected, T);
        for offset in [100, 200, 300, 400] {
            assert!(!throttle.should_act(EventType::ViewSelected, T + offset));
        }
        assert!(throttle.should_act(EventType::ViewSelected, T + 500));
    }

    #[test]
    fn last_acted_never_moves_backwards() {
        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::ViewSelected, T + 1000);
        throttle.record_acted(EventType::ViewSelected, T);
        assert_eq!(throttle.last_acted(EventType::ViewSelected), Some(T + 1000));
    }

    #[test]
    fn far_apart_timestamps_do_not_overflow() {
        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::ViewSelected, i64::MAX);
        assert!(!throttle.should_act(EventType::ViewSelected, i64::MIN));

        let mut throttle = EventThrottle::default();
        throttle.record_acted(EventType::ViewSelected, i64::MIN);
        assert!(throttle.should_act(EventType::ViewSelected, i64::MAX));
    }

    #[test]
    fn custom_window() {
        let mut throttle = EventThrottle::new(50);
        throttle.record_acted(EventType::Other, 0);
        assert!(!throttle.should_act(EventType::Other, 49));
        assert!(throttle.should_act(EventType::Other, 50));
        assert_eq!(throttle.window_ms(), 50);
    }
}
