use super::{TensorError, CHANNELS};
use serde_json::Value;

/// A single RGB sample
pub type Rgb = [f32; 3];

/// Batch of RGB images stored row-major as (batch, height, width, channels)
///
/// Samples are expected to lie in [0, 1]. The tensor is immutable once
/// built; transformations produce a new tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl ImageTensor {
    /// Build a tensor from a shape and flat sample buffer
    ///
    /// # Arguments
    /// * `shape` - Dimensions as `[batch, height, width, channels]`
    /// * `data` - Row-major samples, `shape.iter().product()` long
    pub fn new(shape: &[usize], data: Vec<f32>) -> Result<Self, TensorError> {
        let shape: [usize; 4] = shape
            .try_into()
            .map_err(|_| TensorError::InvalidRank(shape.len()))?;

        if shape[3] != CHANNELS {
            return Err(TensorError::InvalidChannels(shape[3]));
        }
        if shape[0] == 0 {
            return Err(TensorError::EmptyBatch);
        }
        if shape[1] == 0 || shape[2] == 0 {
            return Err(TensorError::EmptyImage {
                height: shape[1],
                width: shape[2],
            });
        }

        let expected = element_count(&shape)?;
        if data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    /// Build a tensor filled with a single color
    pub fn filled(
        batch: usize,
        height: usize,
        width: usize,
        color: Rgb,
    ) -> Result<Self, TensorError> {
        let len = element_count(&[batch, height, width, CHANNELS])?;
        let data = color.iter().copied().cycle().take(len).collect();
        Self::new(&[batch, height, width, CHANNELS], data)
    }

    /// Parse a nested JSON array shaped `[B][H][W][3]`
    pub fn from_nested(value: &Value) -> Result<Self, TensorError> {
        let mut shape = Vec::new();
        let mut cursor = value;
        while let Value::Array(items) = cursor {
            shape.push(items.len());
            match items.first() {
                Some(first) => cursor = first,
                None => break,
            }
        }

        if shape.len() != 4 {
            return Err(TensorError::InvalidRank(shape.len()));
        }

        // Shape is read from the first branch only; other branches may be ragged
        element_count(&shape)?;
        let mut data = Vec::new();
        flatten_into(value, &shape, 0, &mut data)?;
        Self::new(&shape, data)
    }

    /// Render the tensor as nested JSON arrays `[B][H][W][3]`
    pub fn to_nested(&self) -> Value {
        let [_, height, width, channels] = self.shape;
        let images = self
            .data
            .chunks(height * width * channels)
            .map(|image| {
                let rows = image
                    .chunks(width * channels)
                    .map(|row| {
                        let pixels = row
                            .chunks(channels)
                            .map(|px| Value::Array(px.iter().map(|&v| Value::from(v)).collect()))
                            .collect();
                        Value::Array(pixels)
                    })
                    .collect();
                Value::Array(rows)
            })
            .collect();
        Value::Array(images)
    }

    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn batch(&self) -> usize {
        self.shape[0]
    }

    pub fn height(&self) -> usize {
        self.shape[1]
    }

    pub fn width(&self) -> usize {
        self.shape[2]
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Number of samples in one image of the batch
    fn image_len(&self) -> usize {
        self.shape[1] * self.shape[2] * self.shape[3]
    }

    /// Borrow the samples of one image in the batch
    pub fn image(&self, index: usize) -> Result<&[f32], TensorError> {
        if index >= self.batch() {
            return Err(TensorError::BatchIndexOutOfRange {
                index,
                batch: self.batch(),
            });
        }
        let len = self.image_len();
        Ok(&self.data[index * len..(index + 1) * len])
    }

    /// Flatten one image's spatial dimensions into an (H*W, 3) pixel list
    pub fn pixels(&self, index: usize) -> Result<Vec<Rgb>, TensorError> {
        Ok(self
            .image(index)?
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
            .collect())
    }

    /// Apply `f` to every sample, producing a new tensor of the same shape
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            shape: self.shape,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

/// Product of the dimensions, rejecting shapes whose size overflows `usize`
fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| TensorError::Malformed(format!("shape {:?} is too large", shape)))
}

fn flatten_into(
    value: &Value,
    shape: &[usize],
    depth: usize,
    out: &mut Vec<f32>,
) -> Result<(), TensorError> {
    if depth == shape.len() {
        let sample = value
            .as_f64()
            .ok_or_else(|| TensorError::Malformed(format!("expected a number, got {}", value)))?;
        out.push(sample as f32);
        return Ok(());
    }

    let items = value.as_array().ok_or_else(|| {
        TensorError::Malformed(format!("expected an array at depth {}", depth))
    })?;

    if items.len() != shape[depth] {
        return Err(TensorError::Malformed(format!(
            "expected {} entries at depth {}, got {}",
            shape[depth],
            depth,
            items.len()
        )));
    }

    for item in items {
        flatten_into(item, shape, depth + 1, out)?;
    }

    Ok(())
}
