use serde::Serialize;

use crate::gesture::{GestureCallback, GestureStroke};
use crate::overlay::{OverlayLayout, OverlayStyle};
use crate::platform::{GestureInjector, ServiceHost, ServiceInfo, WindowSurface};

/// Every effect the engine had on the host, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "call")]
pub enum HostCall {
    SetServiceInfo { info: ServiceInfo },
    AttachOverlay { style: OverlayStyle, layout: OverlayLayout },
    UpdateOverlayLayout { layout: OverlayLayout },
    DetachOverlay,
    Gesture { id: u64, stroke: GestureStroke, accepted: bool },
    GlobalBack,
}

/// In-memory host. Gesture callbacks are queued and only fire when the
/// driver calls `complete_pending_gestures`, after the decision cycle.
#[derive(Debug)]
pub struct RecordingHost {
    window_height: i32,
    service_info: Option<ServiceInfo>,
    overlay_attached: bool,
    accept_gestures: bool,
    pending_gestures: Vec<GestureCallback>,
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new(window_height: i32) -> Self {
        Self {
            window_height,
            service_info: Some(ServiceInfo::default()),
            overlay_attached: false,
            accept_gestures: true,
            pending_gestures: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// A host that reports no service info, as a misconfigured platform does.
    pub fn without_service_info(window_height: i32) -> Self {
        Self {
            service_info: None,
            ..Self::new(window_height)
        }
    }

    pub fn set_accept_gestures(&mut self, accept: bool) {
        self.accept_gestures = accept;
    }

    /// Drop the overlay the way the platform does on window teardown: no
    /// call is recorded and nobody is told.
    pub fn tear_down_window(&mut self) {
        self.overlay_attached = false;
    }

    pub fn complete_pending_gestures(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending_gestures);
        let count = pending.len();
        pending.into_iter().for_each(GestureCallback::completed);
        count
    }

    pub fn cancel_pending_gestures(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending_gestures);
        let count = pending.len();
        pending.into_iter().for_each(GestureCallback::cancelled);
        count
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn attach_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::AttachOverlay { .. }))
    }

    pub fn relayout_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::UpdateOverlayLayout { .. }))
    }

    pub fn detach_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::DetachOverlay))
    }

    pub fn gesture_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Gesture { .. }))
    }

    pub fn back_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::GlobalBack))
    }

    fn count(&self, predicate: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl WindowSurface for RecordingHost {
    fn attach_overlay(&mut self, style: &OverlayStyle, layout: &OverlayLayout) {
        self.overlay_attached = true;
        self.calls.push(HostCall::AttachOverlay {
            style: style.clone(),
            layout: *layout,
        });
    }

    fn update_overlay_layout(&mut self, layout: &OverlayLayout) {
        self.calls
            .push(HostCall::UpdateOverlayLayout { layout: *layout });
    }

    fn detach_overlay(&mut self) {
        self.overlay_attached = false;
        self.calls.push(HostCall::DetachOverlay);
    }

    fn overlay_attached(&self) -> bool {
        self.overlay_attached
    }

    fn maximum_window_height(&self) -> i32 {
        self.window_height
    }
}

impl GestureInjector for RecordingHost {
    fn dispatch_gesture(&mut self, stroke: GestureStroke, callback: GestureCallback) -> bool {
        let accepted = self.accept_gestures;
        self.calls.push(HostCall::Gesture {
            id: callback.id(),
            stroke,
            accepted,
        });
        if accepted {
            self.pending_gestures.push(callback);
        }
        accepted
    }
}

impl ServiceHost for RecordingHost {
    fn service_info(&self) -> Option<ServiceInfo> {
        self.service_info.clone()
    }

    fn set_service_info(&mut self, info: ServiceInfo) {
        self.service_info = Some(info.clone());
        self.calls.push(HostCall::SetServiceInfo { info });
    }

    fn perform_global_back(&mut self) -> bool {
        self.calls.push(HostCall::GlobalBack);
        true
    }
}
