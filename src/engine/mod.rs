//! Turns one accessibility event plus its snapshot into at most one effect
//! on the host: hide or show the overlay, drag a panel away, or go back.

mod maps;
mod profile_tab;
mod social;
pub mod targets;

use anyhow::{bail, Result};
use serde::Serialize;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::EngineConfig;
use crate::gesture::{GestureDispatcher, GestureOutcome};
use crate::overlay::{OverlayController, OverlayState, OverlayStyle};
use crate::platform::{
    AccessibilityNode, EventType, ServiceFlags, ServiceHost, UiEvent, WindowChanges,
};
use crate::sensing::{dump_tree, EventThrottle};

pub use profile_tab::ProfileTabCache;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_error, log_info};

/// What the engine did with an event. Effects are already applied on the
/// host by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "reaction")]
pub enum Reaction {
    Ignored,
    Throttled,
    HideOverlay,
    /// `top`/`bottom` are the requested region before clamping; `shown` is
    /// false when the region was too small to cover.
    ShowOverlay { top: i32, bottom: i32, shown: bool },
    Gesture { dispatched: bool },
    Back,
}

/// Per-connection service state. Build one when the host connects and drop
/// it on disconnect; nothing survives across connections.
#[derive(Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
    throttle: EventThrottle,
    overlay: OverlayController,
    gestures: GestureDispatcher,
    profile_tab: ProfileTabCache,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        let style = OverlayStyle::for_variant(config.variant, &config.app_name);
        Self {
            throttle: EventThrottle::default(),
            overlay: OverlayController::new(style),
            gestures: GestureDispatcher::new(),
            profile_tab: ProfileTabCache::new(),
            config,
        }
    }

    /// Request view ids and interactive windows from the host and start a
    /// fresh engine. A host without service info cannot be configured, so
    /// the service stays disabled.
    pub fn connect<H: ServiceHost>(host: &mut H, config: EngineConfig) -> Result<Self> {
        let Some(mut info) = host.service_info() else {
            log_error!("service_info() returned None!");
            bail!("host returned no service info");
        };

        info.flags = info
            .flags
            .union(ServiceFlags::REPORT_VIEW_IDS)
            .union(ServiceFlags::RETRIEVE_INTERACTIVE_WINDOWS);
        host.set_service_info(info);

        log_info!("Service connected ({:?} variant)", config.variant);
        Ok(Self::new(config))
    }

    pub fn on_event<H, N>(&mut self, host: &mut H, event: &UiEvent<'_, N>) -> Reaction
    where
        H: ServiceHost,
        N: AccessibilityNode,
    {
        let Some(package) = event.package else {
            return self.on_system_event(host, event);
        };

        if !self.throttle.should_act(event.event_type, event.event_time) {
            return Reaction::Throttled;
        }
        log_debug!("event {:?} from {} at {}", event.event_type, package, event.event_time);

        match package {
            targets::MAPS_PACKAGE => self.on_maps_event(host, event),
            targets::SOCIAL_PACKAGE => self.on_social_event(host, event),
            _ => Reaction::Ignored,
        }
    }

    /// Events without a package only matter when window focus or stacking
    /// changed; the overlay may now sit over something else, so drop it.
    fn on_system_event<H, N>(&mut self, host: &mut H, event: &UiEvent<'_, N>) -> Reaction
    where
        H: ServiceHost,
        N: AccessibilityNode,
    {
        let focus_or_stacking = WindowChanges::ACTIVE.union(WindowChanges::LAYER);
        if event.event_type == EventType::WindowsChanged
            && event.window_changes.intersects(focus_or_stacking)
        {
            log_info!("Hiding overlay: window focus or stacking changed");
            self.overlay.hide(host);
            return Reaction::HideOverlay;
        }
        Reaction::Ignored
    }

    pub fn interrupt(&mut self) {
        log_debug!("Service interrupted");
    }

    /// Remove the overlay and drop all per-connection state.
    pub fn disconnect<H: ServiceHost>(mut self, host: &mut H) {
        self.overlay.hide(host);
        log_info!("Service disconnected");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn throttle(&self) -> &EventThrottle {
        &self.throttle
    }

    pub fn take_gesture_outcomes(&mut self) -> Option<UnboundedReceiver<GestureOutcome>> {
        self.gestures.take_outcomes()
    }

    fn dump_source<N: AccessibilityNode>(&self, label: &str, source: Option<&N>) {
        if !self.config.debug {
            return;
        }
        if let Some(root) = source {
            log_debug!("{}\n{}", label, dump_tree(root));
        }
    }
}
