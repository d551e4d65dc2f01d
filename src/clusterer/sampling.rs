use crate::tensor::Rgb;
use rand::seq::{index, SliceRandom};
use rand::Rng;

use super::ClusterError;

/// Keep at most `cap` pixels, drawn uniformly without replacement
pub fn sample_pixels<R: Rng + ?Sized>(pixels: Vec<Rgb>, cap: usize, rng: &mut R) -> Vec<Rgb> {
    if pixels.len() <= cap {
        return pixels;
    }

    index::sample(rng, pixels.len(), cap)
        .iter()
        .map(|i| pixels[i])
        .collect()
}

/// Pick `k` samples with pairwise distinct colors, uniformly at random
///
/// Fails when the sample set holds fewer than `k` distinct colors, so
/// clustering never starts from duplicated centroids.
pub fn pick_initial_centroids<R: Rng + ?Sized>(
    samples: &[Rgb],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Rgb>, ClusterError> {
    let mut order: Vec<usize> = (0..samples.len()).collect();
    order.shuffle(rng);

    let mut picked: Vec<Rgb> = Vec::with_capacity(k);
    for i in order {
        let px = samples[i];
        if !picked.contains(&px) {
            picked.push(px);
            if picked.len() == k {
                return Ok(picked);
            }
        }
    }

    Err(ClusterError::InsufficientColors {
        requested: k,
        available: picked.len(),
    })
}
