use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::platform::GestureInjector;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Long enough to register as a drag rather than a tap.
pub const STROKE_DURATION_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A single straight stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureStroke {
    pub from: Point,
    pub to: Point,
    pub start_delay_ms: u64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureStatus {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureOutcome {
    pub id: u64,
    pub stroke: GestureStroke,
    pub status: GestureStatus,
}

/// Handed to the host with every dispatch. The host calls exactly one of
/// `completed` / `cancelled` at some later point; the outcome is logged and
/// forwarded to the dispatcher's outcome channel if one was taken.
#[derive(Debug)]
pub struct GestureCallback {
    id: u64,
    stroke: GestureStroke,
    outcomes: Option<UnboundedSender<GestureOutcome>>,
}

impl GestureCallback {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn completed(self) {
        log_info!("Gesture completed");
        self.report(GestureStatus::Completed);
    }

    pub fn cancelled(self) {
        log_info!("Gesture cancelled");
        self.report(GestureStatus::Cancelled);
    }

    fn report(self, status: GestureStatus) {
        let Some(outcomes) = self.outcomes else {
            return;
        };
        // Nobody listening is fine: outcomes are diagnostics only.
        let _ = outcomes.send(GestureOutcome {
            id: self.id,
            stroke: self.stroke,
            status,
        });
    }
}

/// Outcomes are only queued once a listener has taken the receiver; until
/// then they are logged and dropped.
#[derive(Debug, Default)]
pub struct GestureDispatcher {
    next_id: u64,
    outcomes: Option<UnboundedSender<GestureOutcome>>,
}

impl GestureDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the outcome channel and hand out its receiving end. Only the
    /// first call gets it; gestures resolved before then are not replayed.
    pub fn take_outcomes(&mut self) -> Option<UnboundedReceiver<GestureOutcome>> {
        if self.outcomes.is_some() {
            return None;
        }
        let (tx, rx) = mpsc::unbounded_channel();
        self.outcomes = Some(tx);
        Some(rx)
    }

    /// Drag straight from `(x, y_start)` to `(x, y_end)`. Returns whether the
    /// host accepted the gesture, not whether it finished.
    pub fn dispatch_vertical_swipe<G: GestureInjector>(
        &mut self,
        injector: &mut G,
        x: i32,
        y_start: i32,
        y_end: i32,
    ) -> bool {
        self.next_id += 1;
        let stroke = GestureStroke {
            from: Point { x, y: y_start },
            to: Point { x, y: y_end },
            start_delay_ms: 0,
            duration_ms: STROKE_DURATION_MS,
        };
        let callback = GestureCallback {
            id: self.next_id,
            stroke,
            outcomes: self.outcomes.clone(),
        };

        let dispatched = injector.dispatch_gesture(stroke, callback);
        if dispatched {
            log_info!("Dispatch gesture #{}: {}", self.next_id, dispatched);
        } else {
            log_warn!("Dispatch gesture #{} rejected by host", self.next_id);
        }
        dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::{HostCall, RecordingHost};

    #[test]
    fn builds_a_single_vertical_stroke() {
        let mut dispatcher = GestureDispatcher::new();
        let mut host = RecordingHost::new(2400);

        assert!(dispatcher.dispatch_vertical_swipe(&mut host, 540, 1505, 1700));

        match host.calls() {
            [HostCall::Gesture { stroke, .. }] => {
                assert_eq!(stroke.from, Point { x: 540, y: 1505 });
                assert_eq!(stroke.to, Point { x: 540, y: 1700 });
                assert_eq!(stroke.start_delay_ms, 0);
                assert!(stroke.duration_ms > 0);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[test]
    fn rejection_is_reported_but_not_retried() {
        let mut dispatcher = GestureDispatcher::new();
        let mut host = RecordingHost::new(2400);
        host.set_accept_gestures(false);

        assert!(!dispatcher.dispatch_vertical_swipe(&mut host, 10, 20, 30));
        assert_eq!(host.gesture_count(), 1);
    }

    #[test]
    fn outcomes_arrive_only_after_the_host_completes() {
        let mut dispatcher = GestureDispatcher::new();
        let mut outcomes = dispatcher.take_outcomes().unwrap();
        assert!(dispatcher.take_outcomes().is_none());

        let mut host = RecordingHost::new(2400);
        dispatcher.dispatch_vertical_swipe(&mut host, 10, 20, 30);
        dispatcher.dispatch_vertical_swipe(&mut host, 10, 20, 30);
        assert!(outcomes.try_recv().is_err());

        host.complete_pending_gestures();

        let first = outcomes.try_recv().unwrap();
        let second = outcomes.try_recv().unwrap();
        assert_eq!((first.id, first.status), (1, GestureStatus::Completed));
        assert_eq!(second.id, 2);
        assert!(outcomes.try_recv().is_err());
    }

    #[test]
    fn outcomes_are_not_queued_until_someone_listens() {
        let mut dispatcher = GestureDispatcher::new();
        let mut host = RecordingHost::new(2400);

        for _ in 0..1000 {
            dispatcher.dispatch_vertical_swipe(&mut host, 10, 20, 30);
            host.complete_pending_gestures();
        }

        let mut outcomes = dispatcher.take_outcomes().unwrap();
        assert!(outcomes.try_recv().is_err());

        dispatcher.dispatch_vertical_swipe(&mut host, 10, 20, 30);
        host.complete_pending_gestures();
        assert_eq!(outcomes.try_recv().unwrap().id, 1001);
        assert!(outcomes.try_recv().is_err());
    }

    #[test]
    fn cancelled_callback_reports_cancellation() {
        let mut dispatcher = GestureDispatcher::new();
        let mut outcomes = dispatcher.take_outcomes().unwrap();
        let mut host = RecordingHost::new(2400);

        dispatcher.dispatch_vertical_swipe(&mut host, 10, 20, 30);
        host.cancel_pending_gestures();

        assert_eq!(outcomes.try_recv().unwrap().status, GestureStatus::Cancelled);
    }
}
