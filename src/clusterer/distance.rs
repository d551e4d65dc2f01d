use crate::tensor::Rgb;

/// Squared Euclidean distance in RGB space
///
/// Ordering matches true Euclidean distance, so the square root is skipped.
pub fn squared_distance(a: &Rgb, b: &Rgb) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

/// Index of the closest centroid; ties resolve to the lowest index
pub fn nearest_centroid(px: &Rgb, centroids: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;

    for (c, center) in centroids.iter().enumerate() {
        let d = squared_distance(px, center);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }

    best
}
