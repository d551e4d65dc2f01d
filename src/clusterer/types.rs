use crate::tensor::Rgb;
use serde::{Deserialize, Serialize};

/// Elementwise closeness test used to detect convergence
///
/// Two values are close when `|new - old| <= atol + rtol * |new|`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub rtol: f32,
    pub atol: f32,
}

impl Tolerance {
    pub fn new(rtol: f32, atol: f32) -> Self {
        Self { rtol, atol }
    }

    pub fn is_close(&self, old: f32, new: f32) -> bool {
        (new - old).abs() <= self.atol + self.rtol * new.abs()
    }

    /// True when every channel of every centroid is close to its predecessor
    pub fn all_close(&self, old: &[Rgb], new: &[Rgb]) -> bool {
        old.len() == new.len()
            && old
                .iter()
                .zip(new)
                .all(|(a, b)| (0..3).all(|i| self.is_close(a[i], b[i])))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-5, 1e-8)
    }
}

/// Iteration limits for Lloyd's method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KmeansParams {
    pub max_iters: usize,
    pub tolerance: Tolerance,
}

impl Default for KmeansParams {
    fn default() -> Self {
        Self {
            max_iters: super::DEFAULT_MAX_ITERS,
            tolerance: Tolerance::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cluster {
    pub id: u32,
    /// Indices into the clustered sample set
    pub members: Vec<usize>,
    pub centroid: Rgb,
}

#[derive(Debug, Clone)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    pub iterations: usize,
    pub converged: bool,
}

impl ClusterResult {
    pub fn centroids(&self) -> Vec<Rgb> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    /// Centroids rounded to `decimals` places, in cluster order
    pub fn palette(&self, decimals: i32) -> Vec<Rgb> {
        self.clusters
            .iter()
            .map(|c| c.centroid.map(|v| round_to(v, decimals)))
            .collect()
    }
}

pub fn round_to(v: f32, decimals: i32) -> f32 {
    let scale = 10f64.powi(decimals);
    ((v as f64 * scale).round() / scale) as f32
}
