use super::*;
use image::{Rgb as Rgb8, RgbImage};
use serde_json::{json, Value};

#[test]
fn test_new_valid_shape() {
    let tensor = ImageTensor::new(&[2, 3, 4, 3], vec![0.5; 72]).unwrap();
    assert_eq!(tensor.shape(), [2, 3, 4, 3]);
    assert_eq!(tensor.batch(), 2);
    assert_eq!(tensor.height(), 3);
    assert_eq!(tensor.width(), 4);
}

#[test]
fn test_new_rejects_wrong_rank() {
    let err = ImageTensor::new(&[3, 4, 3], vec![0.0; 36]).unwrap_err();
    assert_eq!(err, TensorError::InvalidRank(3));
}

#[test]
fn test_new_rejects_wrong_channels() {
    let err = ImageTensor::new(&[1, 2, 2, 4], vec![0.0; 16]).unwrap_err();
    assert_eq!(err, TensorError::InvalidChannels(4));
}

#[test]
fn test_new_rejects_length_mismatch() {
    let err = ImageTensor::new(&[1, 2, 2, 3], vec![0.0; 11]).unwrap_err();
    assert_eq!(
        err,
        TensorError::DataLengthMismatch {
            expected: 12,
            actual: 11
        }
    );
}

#[test]
fn test_new_rejects_empty_batch() {
    let err = ImageTensor::new(&[0, 2, 2, 3], vec![]).unwrap_err();
    assert_eq!(err, TensorError::EmptyBatch);
}

#[test]
fn test_new_rejects_empty_image() {
    let err = ImageTensor::new(&[1, 0, 4, 3], vec![]).unwrap_err();
    assert_eq!(err, TensorError::EmptyImage { height: 0, width: 4 });
}

#[test]
fn test_pixels_flattens_first_image() {
    let data: Vec<f32> = (0..24).map(|i| i as f32 / 24.0).collect();
    let tensor = ImageTensor::new(&[2, 2, 2, 3], data.clone()).unwrap();

    let pixels = tensor.pixels(1).unwrap();
    assert_eq!(pixels.len(), 4);
    assert_eq!(pixels[0], [data[12], data[13], data[14]]);
    assert_eq!(pixels[3], [data[21], data[22], data[23]]);
}

#[test]
fn test_image_index_out_of_range() {
    let tensor = ImageTensor::filled(1, 2, 2, [0.1, 0.2, 0.3]).unwrap();
    assert!(matches!(
        tensor.image(1),
        Err(TensorError::BatchIndexOutOfRange { index: 1, batch: 1 })
    ));
}

#[test]
fn test_filled_repeats_color() {
    let tensor = ImageTensor::filled(1, 3, 3, [0.25, 0.5, 0.75]).unwrap();
    assert!(tensor
        .pixels(0)
        .unwrap()
        .iter()
        .all(|px| *px == [0.25, 0.5, 0.75]));
}

#[test]
fn test_nested_json_shape() {
    let tensor = ImageTensor::filled(1, 2, 3, [0.0, 0.5, 1.0]).unwrap();
    let nested = tensor.to_nested();

    let images = nested.as_array().unwrap();
    assert_eq!(images.len(), 1);
    let rows = images[0].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].as_array().unwrap().len(), 3);
    assert_eq!(rows[1][2], json!([0.0, 0.5, 1.0]));

    let parsed = ImageTensor::from_nested(&nested).unwrap();
    assert_eq!(parsed, tensor);
}

#[test]
fn test_from_nested_rejects_ragged_rows() {
    let value = json!([[[[0.0, 0.0, 0.0]], [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]]]);
    assert!(matches!(
        ImageTensor::from_nested(&value),
        Err(TensorError::Malformed(_))
    ));
}

#[test]
fn test_from_nested_ragged_with_huge_first_branch() {
    // First branch claims 200000 x 200000 x 200000 pixels, the rest are empty
    const WIDE: usize = 200_000;
    let padded = |first: Value| {
        let mut items = vec![first];
        items.extend((1..WIDE).map(|_| json!([])));
        Value::Array(items)
    };
    let value = padded(padded(padded(json!([0.0, 0.0, 0.0]))));

    assert!(matches!(
        ImageTensor::from_nested(&value),
        Err(TensorError::Malformed(_))
    ));
}

#[test]
fn test_shape_overflow_is_rejected() {
    assert!(matches!(
        ImageTensor::new(&[usize::MAX, 2, 2, 3], vec![]),
        Err(TensorError::Malformed(_))
    ));
    assert!(matches!(
        ImageTensor::filled(usize::MAX, 2, 2, [0.0, 0.0, 0.0]),
        Err(TensorError::Malformed(_))
    ));
}

#[test]
fn test_from_nested_rejects_rank_three() {
    let value = json!([[[0.0, 0.0, 0.0]]]);
    assert_eq!(
        ImageTensor::from_nested(&value).unwrap_err(),
        TensorError::InvalidRank(3)
    );
}

#[test]
fn test_from_rgb_images_normalizes() {
    let img = RgbImage::from_pixel(2, 1, Rgb8([255, 0, 51]));
    let tensor = ImageTensor::from_rgb_images(&[img]).unwrap();

    assert_eq!(tensor.shape(), [1, 1, 2, 3]);
    let px = tensor.pixels(0).unwrap()[0];
    assert_eq!(px[0], 1.0);
    assert_eq!(px[1], 0.0);
    assert!((px[2] - 0.2).abs() < 1e-6);
}

#[test]
fn test_from_rgb_images_rejects_mixed_sizes() {
    let a = RgbImage::new(2, 2);
    let b = RgbImage::new(3, 2);
    assert!(matches!(
        ImageTensor::from_rgb_images(&[a, b]),
        Err(TensorError::Ragged { .. })
    ));
}

#[test]
fn test_to_rgb_images_clamps() {
    let tensor = ImageTensor::new(&[1, 1, 1, 3], vec![-0.5, 0.5, 1.5]).unwrap();
    let images = tensor.to_rgb_images();

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].get_pixel(0, 0).0, [0, 128, 255]);
}
