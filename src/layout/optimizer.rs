//! Layout optimizer
//!
//! Rules run once over the top-level children of the first page, in order:
//!
//! 1. Text with `fontSize > 24` is center aligned.
//! 2. Text after the first element keeps at least 20 units below the bottom
//!    edge of the element before it.
//! 3. Rectangles get `cornerRadius >= 5`.
//!
//! Nested groups and later pages are left untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{LayoutError, LayoutResult};
use crate::observability::Logger;

/// Font size above which text counts as a title
pub const TITLE_FONT_SIZE: f64 = 24.0;

/// Font size assumed when an element has none
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Height assumed when an element has none
pub const DEFAULT_HEIGHT: f64 = 50.0;

/// Minimum vertical gap between consecutive elements
pub const MIN_SPACING: f64 = 20.0;

/// Smallest corner radius for rectangles
pub const MIN_CORNER_RADIUS: f64 = 5.0;

/// Characters of title text kept in change descriptions
pub const PREVIEW_CHARS: usize = 30;

/// Optimization request
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutOptimizationRequest {
    /// Polotno JSON layout
    pub layout: Map<String, Value>,
    /// "flyer" or "card"
    #[serde(default = "default_layout_type", rename = "type")]
    pub layout_type: String,
    /// "minimal", "standard" or "aggressive"
    #[serde(default = "default_optimization_level")]
    pub optimization_level: String,
}

fn default_layout_type() -> String {
    "flyer".to_string()
}

fn default_optimization_level() -> String {
    "standard".to_string()
}

/// Optimized layout with the changes that produced it
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOptimization {
    pub data: Map<String, Value>,
    pub changes_made: Vec<String>,
    pub optimization_score: f64,
}

/// Score for a given number of changes, in tenths from 0.7 up to 1.0
pub fn optimization_score(changes: usize) -> f64 {
    (7 + changes.min(3)) as f64 / 10.0
}

/// Apply the layout rules to a copy of `layout`
pub fn optimize(mut layout: Map<String, Value>) -> LayoutResult<LayoutOptimization> {
    let mut changes_made = Vec::new();

    if let Some(Value::Array(pages)) = layout.get_mut("pages") {
        if let Some(page) = pages.first_mut() {
            let page = page.as_object_mut().ok_or(LayoutError::InvalidPage)?;
            match page.get_mut("children") {
                None => {}
                Some(Value::Array(elements)) => optimize_elements(elements, &mut changes_made)?,
                Some(_) => return Err(LayoutError::InvalidChildren),
            }
        }
    }

    let optimization_score = optimization_score(changes_made.len());

    Ok(LayoutOptimization {
        data: layout,
        changes_made,
        optimization_score,
    })
}

fn optimize_elements(elements: &mut [Value], changes: &mut Vec<String>) -> LayoutResult<()> {
    for index in 0..elements.len() {
        let (done, rest) = elements.split_at_mut(index);
        let element = rest[0]
            .as_object_mut()
            .ok_or(LayoutError::InvalidElement(index))?;

        match element.get("type").and_then(Value::as_str) {
            Some("text") => {
                center_title(element, changes);

                if let Some(previous) = done.last() {
                    let previous = previous
                        .as_object()
                        .ok_or(LayoutError::InvalidElement(index - 1))?;
                    enforce_spacing(previous, element, changes);
                }
            }
            Some("rect") => round_corners(element, changes),
            _ => {}
        }
    }

    Ok(())
}

fn center_title(element: &mut Map<String, Value>, changes: &mut Vec<String>) {
    let font_size = number(element, "fontSize").unwrap_or(DEFAULT_FONT_SIZE);
    if font_size <= TITLE_FONT_SIZE {
        return;
    }

    element.insert("align".to_string(), Value::from("center"));

    let preview: String = element
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .chars()
        .take(PREVIEW_CHARS)
        .collect();
    Logger::info("LAYOUT_TITLE_CENTERED", &[("preview", preview.as_str())]);

    changes.push(format!("Centered title text: {}...", preview));
}

fn enforce_spacing(
    previous: &Map<String, Value>,
    element: &mut Map<String, Value>,
    changes: &mut Vec<String>,
) {
    let bottom = number(previous, "y").unwrap_or(0.0)
        + number(previous, "height").unwrap_or(DEFAULT_HEIGHT);
    let y = number(element, "y").unwrap_or(0.0);

    if y - bottom < MIN_SPACING {
        element.insert("y".to_string(), to_number(bottom + MIN_SPACING));
        changes.push("Improved element spacing".to_string());
    }
}

fn round_corners(element: &mut Map<String, Value>, changes: &mut Vec<String>) {
    let radius = number(element, "cornerRadius").unwrap_or(0.0);
    if radius < MIN_CORNER_RADIUS {
        element.insert("cornerRadius".to_string(), to_number(MIN_CORNER_RADIUS));
    }
    changes.push("Improved shape corner radius".to_string());
}

fn number(element: &Map<String, Value>, key: &str) -> Option<f64> {
    element.get(key).and_then(Value::as_f64)
}

/// Whole numbers are written back as integers to keep the editor's JSON tidy
fn to_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}
