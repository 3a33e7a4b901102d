//! Object removal by inpainting
//!
//! Both the image and the mask are decoded so malformed uploads fail early;
//! the result is the original image until a model is wired in.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::errors::ImagingResult;
use super::payload::decode_payload;

fn default_prompt() -> String {
    "remove object and fill with background".to_string()
}

/// Inpainting request
#[derive(Debug, Clone, Deserialize)]
pub struct InpaintRequest {
    /// Base64 encoded source image
    pub image: String,
    /// Base64 encoded mask, white where content is removed
    pub mask: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Inpainting response
#[derive(Debug, Clone, Serialize)]
pub struct InpaintResponse {
    pub inpainted_image: String,
    /// Seconds
    pub processing_time: f64,
}

/// Run an inpainting job
pub async fn inpaint(request: InpaintRequest, delay: Duration) -> ImagingResult<InpaintResponse> {
    let _image = decode_payload("image", &request.image)?;
    let _mask = decode_payload("mask", &request.mask)?;

    let started = Instant::now();
    tokio::time::sleep(delay).await;

    Ok(InpaintResponse {
        inpainted_image: request.image,
        processing_time: started.elapsed().as_secs_f64(),
    })
}
