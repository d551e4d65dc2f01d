use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    #[error("Image tensor must be 4-dimensional (B, H, W, C), got rank {0}")]
    InvalidRank(usize),

    #[error("Image tensor must have 3 channels, got {0}")]
    InvalidChannels(usize),

    #[error("Image tensor data length {actual} does not match shape product {expected}")]
    DataLengthMismatch { expected: usize, actual: usize },

    #[error("Image tensor batch is empty")]
    EmptyBatch,

    #[error("Image has no pixels: {height}x{width}")]
    EmptyImage { height: usize, width: usize },

    #[error("Batch index {index} out of range for batch of {batch}")]
    BatchIndexOutOfRange { index: usize, batch: usize },

    #[error("Images in a batch must share dimensions: expected {expected:?}, got {actual:?}")]
    Ragged {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Malformed nested tensor: {0}")]
    Malformed(String),
}
