use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Failed to write preview file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode preview PNG: {0}")]
    Encoding(#[from] png::EncodingError),
}
