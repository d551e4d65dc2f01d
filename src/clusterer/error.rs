use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Cluster count must be at least 1")]
    ZeroClusters,

    #[error("Cannot cluster an empty sample set")]
    EmptySampleSet,

    #[error(
        "Cannot initialize {requested} centroids: sample set has only {available} distinct colors"
    )]
    InsufficientColors { requested: usize, available: usize },
}
