use rand::Rng;
use tracing::trace;

use crate::clusterer::{
    centroid::update_centroids,
    distance::nearest_centroid,
    sampling::pick_initial_centroids,
    types::{Cluster, ClusterResult, KmeansParams},
    ClusterError,
};
use crate::tensor::Rgb;

/// Lloyd's k-means over RGB samples
///
/// Centroids start at `k` randomly chosen samples with distinct colors. Each
/// round assigns every sample to its nearest centroid and moves centroids to
/// the mean of their members. A centroid that loses all members keeps its
/// previous position. Stops after `params.max_iters` rounds or once no
/// centroid moves beyond `params.tolerance`.
pub fn kmeans<R: Rng + ?Sized>(
    samples: &[Rgb],
    k: usize,
    params: &KmeansParams,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }
    if samples.is_empty() {
        return Err(ClusterError::EmptySampleSet);
    }

    // 1. Pick random initial centers
    let mut centroids = pick_initial_centroids(samples, k, rng)?;

    let mut assignments = vec![0usize; samples.len()];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..params.max_iters {
        iterations += 1;

        // 2. Assign each sample to nearest centroid
        for (slot, px) in assignments.iter_mut().zip(samples) {
            *slot = nearest_centroid(px, &centroids);
        }

        // 3. Recompute centroids, keeping empty ones in place
        let updated = update_centroids(samples, &assignments, &centroids);

        let settled = params.tolerance.all_close(&centroids, &updated);
        centroids = updated;
        trace!(iteration = iterations, settled, "k-means round");

        if settled {
            converged = true;
            break;
        }
    }

    // 4. Build result clusters
    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .enumerate()
        .map(|(i, centroid)| Cluster {
            id: i as u32,
            members: Vec::new(),
            centroid,
        })
        .collect();

    for (sample, &cluster_idx) in assignments.iter().enumerate() {
        clusters[cluster_idx].members.push(sample);
    }

    Ok(ClusterResult {
        clusters,
        iterations,
        converged,
    })
}
