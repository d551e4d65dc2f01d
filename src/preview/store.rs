use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use super::{PreviewError, TEMP_STORAGE};
use crate::tensor::ImageTensor;

/// Descriptor of a saved preview, as reported back to the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImage {
    pub filename: String,
    pub subfolder: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Writes temporary preview PNGs into a single directory
///
/// File names carry a random five-letter suffix drawn once per store and a
/// running counter.
pub struct PreviewStore {
    dir: PathBuf,
    prefix: String,
    suffix: String,
    counter: AtomicU32,
}

impl PreviewStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        let mut rng = rand::rng();
        let suffix = (0..5)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect();

        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            suffix,
            counter: AtomicU32::new(1),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_filename(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}_temp_{}_{:05}_.png", self.prefix, self.suffix, n)
    }

    /// Save every image of the batch as an 8-bit RGB PNG
    ///
    /// # Arguments
    /// * `images` - Batch to save, samples clamped to [0, 1]
    /// * `text` - Key/value pairs embedded as PNG text chunks
    pub fn save_batch(
        &self,
        images: &ImageTensor,
        text: &[(String, String)],
    ) -> Result<Vec<SavedImage>, PreviewError> {
        let text: Vec<&(String, String)> = text
            .iter()
            .filter(|(key, _)| {
                let valid = is_valid_keyword(key);
                if !valid {
                    tracing::warn!(key = %key, "Skipping invalid PNG text keyword");
                }
                valid
            })
            .collect();

        fs::create_dir_all(&self.dir)?;

        let mut saved = Vec::with_capacity(images.batch());
        for img in images.to_rgb_images() {
            let (width, height) = img.dimensions();
            let encoded = encode_png(img.as_raw(), width, height, &text)?;

            let filename = self.next_filename();
            let path = self.dir.join(&filename);
            fs::write(&path, encoded)?;

            tracing::info!(path = %path.display(), "Saved preview image");

            saved.push(SavedImage {
                filename,
                subfolder: String::new(),
                kind: TEMP_STORAGE.to_string(),
            });
        }

        Ok(saved)
    }
}

/// Encode an 8-bit RGB buffer as PNG bytes
fn encode_png(
    raw: &[u8],
    width: u32,
    height: u32,
    text: &[&(String, String)],
) -> Result<Vec<u8>, PreviewError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        for (key, value) in text.iter().copied() {
            if value.chars().all(|c| (c as u32) < 256) {
                encoder.add_text_chunk(key.clone(), value.clone())?;
            } else {
                encoder.add_itxt_chunk(key.clone(), value.clone())?;
            }
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(raw)?;
        writer.finish()?;
    }
    Ok(out)
}

/// PNG text keywords are 1-79 printable Latin-1 characters without
/// leading, trailing or doubled spaces
fn is_valid_keyword(key: &str) -> bool {
    let len = key.chars().count();
    (1..=79).contains(&len)
        && key
            .chars()
            .all(|c| matches!(c as u32, 0x20..=0x7E | 0xA1..=0xFF))
        && !key.starts_with(' ')
        && !key.ends_with(' ')
        && !key.contains("  ")
}
