mod convert;
mod error;
mod image_tensor;

#[cfg(test)]
mod tests;

pub use error::TensorError;
pub use image_tensor::{ImageTensor, Rgb};

/// Number of color channels every image tensor carries
pub const CHANNELS: usize = 3;
