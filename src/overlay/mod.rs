pub mod controller;
pub mod state;

pub use controller::{OverlayController, MIN_GAP, TOP_RESERVE};
pub use state::{OverlayLayout, OverlayState, OverlayStyle, PixelFormat};
