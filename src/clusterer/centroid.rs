use crate::tensor::Rgb;

/// Mean color of a set of samples, or `None` when the set is empty
pub fn compute_centroid<'a>(members: impl IntoIterator<Item = &'a Rgb>) -> Option<Rgb> {
    let mut sum = [0.0f64; 3];
    let mut count = 0usize;

    for px in members {
        for i in 0..3 {
            sum[i] += px[i] as f64;
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some([
        (sum[0] / n) as f32,
        (sum[1] / n) as f32,
        (sum[2] / n) as f32,
    ])
}

/// Move each centroid to the mean of its assigned samples
///
/// Centroids with no assigned samples keep their previous value.
pub fn update_centroids(samples: &[Rgb], assignments: &[usize], previous: &[Rgb]) -> Vec<Rgb> {
    previous
        .iter()
        .enumerate()
        .map(|(c, &prev)| {
            let members = samples
                .iter()
                .zip(assignments)
                .filter(|&(_, &a)| a == c)
                .map(|(px, _)| px);
            compute_centroid(members).unwrap_or(prev)
        })
        .collect()
}
