//! # Imaging
//!
//! Simulated image jobs behind `/api/beautify` and `/api/inpaint`.
//!
//! Each job validates its base64 payloads, waits a configurable latency in
//! place of model inference and echoes the input image.

mod beautify;
mod errors;
mod inpaint;
mod payload;

pub use beautify::{beautify, BeautifyRequest, BeautifyResponse, EnhancementsApplied};
pub use errors::{ImagingError, ImagingResult};
pub use inpaint::{inpaint, InpaintRequest, InpaintResponse};
pub use payload::{decode_payload, strip_data_uri};
