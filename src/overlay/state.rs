use serde::{Deserialize, Serialize};

use crate::config::Variant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum OverlayState {
    #[default]
    Detached,
    Attached { top: i32, bottom: i32 },
}

impl OverlayState {
    pub fn is_attached(&self) -> bool {
        matches!(self, OverlayState::Attached { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PixelFormat {
    Opaque,
    Translucent,
}

/// Window parameters for the overlay view. Width is always the full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayout {
    pub height: i32,
    /// Distance from the bottom edge of the window (bottom gravity).
    pub y: i32,
    pub format: PixelFormat,
    pub focusable: bool,
}

/// What the overlay view draws. Colors are ARGB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub message: String,
    pub text_color: u32,
    pub background: u32,
    pub text_size: f32,
    pub format: PixelFormat,
}

const YELLOW: u32 = 0xFFFF_FF00;
const BLACK: u32 = 0xFF00_0000;
const TRANSLUCENT_BLACK: u32 = 0xDD00_0000;
const TEXT_SIZE: f32 = 35.0;

impl OverlayStyle {
    pub fn for_variant(variant: Variant, app_name: &str) -> Self {
        match variant {
            Variant::FeedDemarcator => Self {
                message: format!("\"Suggested posts\" being obscured by {app_name}"),
                text_color: YELLOW,
                background: BLACK,
                text_size: TEXT_SIZE,
                format: PixelFormat::Opaque,
            },
            Variant::Distractions => Self {
                message: format!("Content being obscured by {app_name}"),
                text_color: YELLOW,
                background: TRANSLUCENT_BLACK,
                text_size: TEXT_SIZE,
                format: PixelFormat::Translucent,
            },
        }
    }
}
