// Public API exports
pub mod clusterer;
pub mod config;
pub mod nodes;
pub mod notify;
pub mod preview;
pub mod tensor;

// Re-export main types for convenience
pub use config::{InvertConfig, NodesConfig, PaletteConfig, PreviewConfig};
pub use tensor::{ImageTensor, Rgb, TensorError};

pub use clusterer::{kmeans, ClusterError, ClusterResult, KmeansParams, Tolerance};

pub use nodes::{
    extract_palette, invert, InvertImage, Node, NodeContext, NodeError, NodeInputs, NodeOutput,
    NodeRegistry, NodeSpec, PaletteExtractor,
};

pub use notify::{JsonLinesNotifier, Notifier, NullNotifier, RecordingNotifier};
pub use preview::{PreviewStore, SavedImage};
