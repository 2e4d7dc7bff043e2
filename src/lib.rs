pub mod config;
pub mod engine;
pub mod gesture;
pub mod overlay;
pub mod platform;
pub mod replay;
pub mod sensing;
pub mod utils;

pub use config::{EngineConfig, Variant};
pub use engine::{DecisionEngine, Reaction};
pub use overlay::{OverlayController, OverlayState};
pub use platform::{AccessibilityNode, EventType, Rect, ServiceHost, UiEvent, WindowChanges};
pub use utils::init_logging;
