mod host;
mod types;

pub use host::{AccessibilityNode, GestureInjector, ServiceHost, WindowSurface};
pub use types::{EventType, Rect, ServiceFlags, ServiceInfo, UiEvent, WindowChanges};
