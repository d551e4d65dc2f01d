use thiserror::Error;

use crate::clusterer::ClusterError;
use crate::preview::PreviewError;
use crate::tensor::TensorError;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Input {name} must be of type {expected}")]
    WrongInputType { name: String, expected: &'static str },

    #[error("Invalid value {value:?} for {name}, expected one of {options:?}")]
    InvalidChoice {
        name: String,
        value: String,
        options: Vec<String>,
    },

    #[error(transparent)]
    Tensor(#[from] TensorError),

    #[error("Clustering failed: {0}")]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Preview(#[from] PreviewError),
}
