pub mod dispatcher;

pub use dispatcher::{
    GestureCallback, GestureDispatcher, GestureOutcome, GestureStatus, GestureStroke, Point,
    STROKE_DURATION_MS,
};
