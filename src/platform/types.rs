use serde::{Deserialize, Serialize};

use super::AccessibilityNode;

/// Pixel rectangle, top-left origin, y increasing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn center_x(&self) -> i32 {
        // Midpoint of two i32 values always fits back into an i32.
        ((i64::from(self.left) + i64::from(self.right)) / 2) as i32
    }
}

/// Event kinds the engine distinguishes. Everything else collapses into
/// `Other`, which still gets its own throttle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    WindowsChanged,
    WindowContentChanged,
    ViewSelected,
    Other,
}

/// Bitmask attached to `WindowsChanged` events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowChanges(pub u32);

impl WindowChanges {
    pub const ADDED: Self = Self(0x0001);
    pub const REMOVED: Self = Self(0x0002);
    pub const TITLE: Self = Self(0x0004);
    pub const BOUNDS: Self = Self(0x0008);
    pub const LAYER: Self = Self(0x0010);
    pub const ACTIVE: Self = Self(0x0020);
    pub const FOCUSED: Self = Self(0x0040);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// Capability flags requested from the host when the service connects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceFlags(pub u32);

impl ServiceFlags {
    pub const REPORT_VIEW_IDS: Self = Self(0x0010);
    pub const RETRIEVE_INTERACTIVE_WINDOWS: Self = Self(0x0040);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub flags: ServiceFlags,
}

/// One change notification from the host. `source` borrows the snapshot
/// root for this decision cycle only.
#[derive(Debug)]
pub struct UiEvent<'a, N: AccessibilityNode> {
    pub package: Option<&'a str>,
    pub event_type: EventType,
    /// Epoch milliseconds.
    pub event_time: i64,
    pub window_changes: WindowChanges,
    pub source: Option<&'a N>,
}
