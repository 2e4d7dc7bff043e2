//! Offline driver: feed a recorded trace through a fresh engine against an
//! in-memory host and collect what happened.

mod host;
mod trace;

pub use host::{HostCall, RecordingHost};
pub use trace::{load_trace, parse_trace, RecordedNode, TraceEvent};

use anyhow::Result;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::engine::{DecisionEngine, Reaction};
use crate::gesture::GestureOutcome;

const ENABLE_LOGS: bool = true;

use crate::log_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResolution {
    Complete,
    Cancel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub event_time: i64,
    pub reaction: Reaction,
    pub calls: Vec<HostCall>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub gesture_outcomes: Vec<GestureOutcome>,
}

/// Connect a fresh engine to `host`, replay `events` one decision cycle at a
/// time, then disconnect. Pending gestures are resolved between cycles, the
/// way a host delivers callbacks after `on_event` has returned.
pub fn run_trace(
    host: &mut RecordingHost,
    config: EngineConfig,
    events: &[TraceEvent],
    resolution: GestureResolution,
) -> Result<ReplayReport> {
    let mut engine = DecisionEngine::connect(host, config)?;
    let mut outcomes = engine.take_gesture_outcomes();
    host.take_calls();

    let mut steps = Vec::with_capacity(events.len());
    let mut gesture_outcomes = Vec::new();

    for event in events {
        let reaction = engine.on_event(host, &event.as_ui_event());
        log_info!(
            "{} {:?} {:?} -> {:?}",
            event.display_time(),
            event.package.as_deref().unwrap_or("-"),
            event.event_type,
            reaction
        );

        steps.push(ReplayStep {
            event_time: event.event_time,
            reaction,
            calls: host.take_calls(),
        });

        match resolution {
            GestureResolution::Complete => host.complete_pending_gestures(),
            GestureResolution::Cancel => host.cancel_pending_gestures(),
        };
        if let Some(rx) = outcomes.as_mut() {
            while let Ok(outcome) = rx.try_recv() {
                gesture_outcomes.push(outcome);
            }
        }
    }

    engine.disconnect(host);

    Ok(ReplayReport {
        steps,
        gesture_outcomes,
    })
}
