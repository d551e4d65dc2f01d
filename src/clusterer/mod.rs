mod centroid;
mod distance;
mod error;
mod kmeans;
mod sampling;
mod types;


pub use centroid::{compute_centroid, update_centroids};
pub use distance::{nearest_centroid, squared_distance};
pub use error::ClusterError;
pub use kmeans::kmeans;
pub use sampling::{pick_initial_centroids, sample_pixels};
pub use types::{round_to, Cluster, ClusterResult, KmeansParams, Tolerance};

/// Upper bound on pixels fed to k-means, independent of image resolution
pub const DEFAULT_SAMPLE_CAP: usize = 1000;

/// Upper bound on Lloyd rounds
pub const DEFAULT_MAX_ITERS: usize = 20;

/// Decimal places kept in reported palettes
pub const PALETTE_DECIMALS: i32 = 3;
