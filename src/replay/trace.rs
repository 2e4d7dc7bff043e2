use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::platform::{AccessibilityNode, EventType, Rect, UiEvent, WindowChanges};

/// A snapshot node captured from a live host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedNode {
    #[serde(default)]
    pub view_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub bounds: Rect,
    #[serde(default)]
    pub children: Vec<RecordedNode>,
}

fn default_visible() -> bool {
    true
}

impl RecordedNode {
    /// An anonymous container, the usual shape of a snapshot root.
    pub fn container(children: Vec<RecordedNode>) -> Self {
        Self {
            view_id: None,
            text: None,
            visible: true,
            bounds: Rect::default(),
            children,
        }
    }

    pub fn view(view_id: &str, bounds: Rect) -> Self {
        Self {
            view_id: Some(view_id.to_string()),
            text: None,
            visible: true,
            bounds,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<RecordedNode>) -> Self {
        self.children = children;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl AccessibilityNode for RecordedNode {
    fn view_id(&self) -> Option<&str> {
        self.view_id.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn is_visible_to_user(&self) -> bool {
        self.visible
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }
}

/// One line of a trace file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEvent {
    #[serde(default)]
    pub package: Option<String>,
    pub event_type: EventType,
    pub event_time: i64,
    #[serde(default)]
    pub window_changes: WindowChanges,
    #[serde(default)]
    pub source: Option<RecordedNode>,
}

impl TraceEvent {
    pub fn as_ui_event(&self) -> UiEvent<'_, RecordedNode> {
        UiEvent {
            package: self.package.as_deref(),
            event_type: self.event_type,
            event_time: self.event_time,
            window_changes: self.window_changes,
            source: self.source.as_ref(),
        }
    }

    /// Event time rendered for log lines; falls back to the raw value.
    pub fn display_time(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.event_time)
            .map(|time| time.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_else(|| format!("{}ms", self.event_time))
    }
}

/// Parse a JSON-lines trace. Blank lines and `#` comments are skipped.
pub fn parse_trace(contents: &str) -> Result<Vec<TraceEvent>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Malformed trace event on line {}", index + 1))
        })
        .collect()
}

pub fn load_trace(path: &Path) -> Result<Vec<TraceEvent>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace from {}", path.display()))?;
    parse_trace(&contents)
}
