use super::*;
use crate::tensor::ImageTensor;
use std::fs::File;

fn read_text_chunks(path: &std::path::Path) -> Vec<(String, String)> {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect()
}

#[test]
fn test_save_batch_writes_one_file_per_image() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path(), "InvertImage");
    let images = ImageTensor::filled(2, 4, 5, [0.0, 0.5, 1.0]).unwrap();

    let saved = store.save_batch(&images, &[]).unwrap();

    assert_eq!(saved.len(), 2);
    for entry in &saved {
        assert_eq!(entry.kind, TEMP_STORAGE);
        assert_eq!(entry.subfolder, "");
        assert!(entry.filename.starts_with("InvertImage_temp_"));
        assert!(entry.filename.ends_with("_.png"));

        let decoded = image::open(dir.path().join(&entry.filename)).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (5, 4));
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 128, 255]);
    }
    assert_ne!(saved[0].filename, saved[1].filename);
}

#[test]
fn test_counter_continues_across_batches() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path(), "p");
    let images = ImageTensor::filled(1, 1, 1, [1.0, 1.0, 1.0]).unwrap();

    let first = store.save_batch(&images, &[]).unwrap();
    let second = store.save_batch(&images, &[]).unwrap();

    assert!(first[0].filename.ends_with("_00001_.png"));
    assert!(second[0].filename.ends_with("_00002_.png"));
}

#[test]
fn test_embeds_text_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path(), "meta");
    let images = ImageTensor::filled(1, 2, 2, [0.2, 0.4, 0.6]).unwrap();
    let text = vec![
        ("prompt".to_string(), r#"{"1":{"class_type":"InvertImage"}}"#.to_string()),
        ("workflow".to_string(), r#"{"nodes":[]}"#.to_string()),
    ];

    let saved = store.save_batch(&images, &text).unwrap();
    let chunks = read_text_chunks(&dir.path().join(&saved[0].filename));

    assert_eq!(chunks, text);
}

#[test]
fn test_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = PreviewStore::new(&nested, "deep");
    let images = ImageTensor::filled(1, 1, 1, [0.0, 0.0, 0.0]).unwrap();

    let saved = store.save_batch(&images, &[]).unwrap();
    assert!(nested.join(&saved[0].filename).exists());
    assert_eq!(store.dir(), nested.as_path());
}

#[test]
fn test_invalid_keywords_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreviewStore::new(dir.path(), "InvertImage");
    let images = ImageTensor::filled(2, 2, 2, [0.5, 0.5, 0.5]).unwrap();
    let text = vec![
        ("k".repeat(100), "too long".to_string()),
        (String::new(), "empty".to_string()),
        (" padded".to_string(), "leading space".to_string()),
        ("ключ".to_string(), "not latin-1".to_string()),
        ("workflow".to_string(), "{}".to_string()),
    ];

    let saved = store.save_batch(&images, &text).unwrap();
    assert_eq!(saved.len(), 2);

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 2);

    for entry in &saved {
        let chunks = read_text_chunks(&dir.path().join(&entry.filename));
        assert_eq!(chunks, vec![("workflow".to_string(), "{}".to_string())]);
    }
}
