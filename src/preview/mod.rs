mod error;
mod store;

#[cfg(test)]
mod tests;

pub use error::PreviewError;
pub use store::{PreviewStore, SavedImage};

/// Storage-type tag the host uses to resolve temporary previews
pub const TEMP_STORAGE: &str = "temp";
