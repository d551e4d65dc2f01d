// convert.rs - bridges between image tensors and 8-bit RGB buffers
use super::{ImageTensor, TensorError, CHANNELS};
use image::{DynamicImage, RgbImage};

impl ImageTensor {
    /// Stack 8-bit RGB images into a normalized tensor
    ///
    /// All images must share the same dimensions.
    pub fn from_rgb_images(images: &[RgbImage]) -> Result<Self, TensorError> {
        let first = images.first().ok_or(TensorError::EmptyBatch)?;
        let expected = first.dimensions();

        let mut data = Vec::with_capacity(images.len() * first.as_raw().len());
        for img in images {
            if img.dimensions() != expected {
                return Err(TensorError::Ragged {
                    expected,
                    actual: img.dimensions(),
                });
            }
            data.extend(img.as_raw().iter().map(|&b| b as f32 / 255.0));
        }

        let (width, height) = expected;
        Self::new(
            &[images.len(), height as usize, width as usize, CHANNELS],
            data,
        )
    }

    /// Stack decoded images of any color type, dropping alpha
    pub fn from_dynamic_images(images: &[DynamicImage]) -> Result<Self, TensorError> {
        let rgb: Vec<RgbImage> = images.iter().map(|img| img.to_rgb8()).collect();
        Self::from_rgb_images(&rgb)
    }

    /// Quantize every image in the batch to 8-bit RGB
    ///
    /// Samples are clamped to [0, 1] before scaling.
    pub fn to_rgb_images(&self) -> Vec<RgbImage> {
        let (width, height) = (self.width() as u32, self.height() as u32);
        (0..self.batch())
            .filter_map(|b| self.image(b).ok())
            .filter_map(|samples| {
                let bytes = samples.iter().map(|&v| quantize(v)).collect();
                RgbImage::from_raw(width, height, bytes)
            })
            .collect()
    }
}

fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
