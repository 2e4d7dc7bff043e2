//! Capabilities the engine expects from the host platform.
//!
//! Nothing in here is implemented by the crate itself except the in-memory
//! [`RecordingHost`](crate::replay::RecordingHost) used for replays and tests.

use crate::gesture::{GestureCallback, GestureStroke};
use crate::overlay::{OverlayLayout, OverlayStyle};

use super::{Rect, ServiceInfo};

/// Read-only view of one element in a snapshot.
pub trait AccessibilityNode {
    fn view_id(&self) -> Option<&str>;

    fn text(&self) -> Option<&str>;

    fn is_visible_to_user(&self) -> bool;

    fn bounds(&self) -> Rect;

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<&Self>;

    /// All nodes in the subtree rooted here (self included) carrying
    /// `view_id`, in pre-order. Hosts with a native query should override.
    fn find_by_view_id(&self, view_id: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.view_id() == Some(view_id) {
                found.push(node);
            }
            for index in (0..node.child_count()).rev() {
                if let Some(child) = node.child(index) {
                    stack.push(child);
                }
            }
        }
        found
    }
}

/// The window manager as seen by the overlay: one view, attached or not.
pub trait WindowSurface {
    fn attach_overlay(&mut self, style: &OverlayStyle, layout: &OverlayLayout);

    fn update_overlay_layout(&mut self, layout: &OverlayLayout);

    fn detach_overlay(&mut self);

    /// Whether the overlay view currently has a parent. The platform may
    /// drop it without telling us, e.g. on window teardown.
    fn overlay_attached(&self) -> bool;

    fn maximum_window_height(&self) -> i32;
}

pub trait GestureInjector {
    /// Submit a stroke. Returns whether the platform accepted it; the
    /// callback fires later, never from inside this call.
    fn dispatch_gesture(&mut self, stroke: GestureStroke, callback: GestureCallback) -> bool;
}

/// Everything a connected service can ask of its host.
pub trait ServiceHost: WindowSurface + GestureInjector {
    fn service_info(&self) -> Option<ServiceInfo>;

    fn set_service_info(&mut self, info: ServiceInfo);

    fn perform_global_back(&mut self) -> bool;
}
