//! Portrait beautification
//!
//! No model runs yet. The job decodes the portrait, waits out the configured
//! latency and hands the input back unchanged.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{ImagingError, ImagingResult};
use super::payload::decode_payload;

/// Beautification request
#[derive(Debug, Clone, Deserialize)]
pub struct BeautifyRequest {
    /// Base64 encoded portrait, usually a data URI
    pub image: String,
    /// Enhancement flags; unknown keys are ignored
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Which enhancements the job applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnhancementsApplied {
    pub face_enhancement: bool,
    pub skin_smoothing: bool,
    pub eye_brightening: bool,
    pub lip_enhancement: bool,
}

impl EnhancementsApplied {
    /// Resolve request options, falling back to per-flag defaults
    pub fn from_options(options: &Map<String, Value>) -> ImagingResult<Self> {
        Ok(Self {
            face_enhancement: flag(options, "enhance_face", true)?,
            skin_smoothing: flag(options, "smooth_skin", true)?,
            eye_brightening: flag(options, "brighten_eyes", true)?,
            lip_enhancement: flag(options, "enhance_lips", false)?,
        })
    }
}

/// Beautification response
#[derive(Debug, Clone, Serialize)]
pub struct BeautifyResponse {
    pub enhanced_image: String,
    /// Seconds
    pub processing_time: f64,
    pub enhancements_applied: EnhancementsApplied,
}

fn flag(options: &Map<String, Value>, key: &str, default: bool) -> ImagingResult<bool> {
    match options.get(key) {
        None => Ok(default),
        Some(value) => coerce_flag(value).ok_or_else(|| ImagingError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Lax boolean: booleans, the numbers 0 and 1, and the usual yes/no words
/// (case-insensitive). `null`, other numbers, other strings and containers
/// are rejected.
fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Some(false),
            Some(f) if f == 1.0 => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "0" | "off" | "f" | "false" | "n" | "no" => Some(false),
            "1" | "on" | "t" | "true" | "y" | "yes" => Some(true),
            _ => None,
        },
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Run a beautification job
pub async fn beautify(request: BeautifyRequest, delay: Duration) -> ImagingResult<BeautifyResponse> {
    let _portrait = decode_payload("image", &request.image)?;
    let enhancements_applied = EnhancementsApplied::from_options(&request.options)?;

    let started = Instant::now();
    tokio::time::sleep(delay).await;

    Ok(BeautifyResponse {
        enhanced_image: request.image,
        processing_time: started.elapsed().as_secs_f64(),
        enhancements_applied,
    })
}
