// events.rs - payloads the host UI listens for
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tensor::Rgb;

pub const PALETTE_UPDATE_EVENT: &str = "color.palette.update";
pub const INVERT_PREVIEW_EVENT: &str = "invert_preview";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteUpdate {
    pub colors: Vec<Rgb>,
    pub message: String,
}

impl PaletteUpdate {
    pub fn new(colors: Vec<Rgb>) -> Self {
        let message = format!("Extracted {} colors from image", colors.len());
        Self { colors, message }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvertPreview {
    pub node_id: Option<String>,
    pub preview_data: PreviewData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewData {
    pub image_out: ImagePreview,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePreview {
    pub shape: [usize; 4],
    /// Nested `[B][H][W][C]` sample array
    pub data: Value,
}
