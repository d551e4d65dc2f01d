mod context;
mod error;
mod invert;
mod io;
mod palette;
mod registry;
mod spec;


pub use context::NodeContext;
pub use error::NodeError;
pub use invert::{invert, invert_clamped, InvertImage, INVERT_CLASS};
pub use io::{InputValue, NodeInputs, NodeOutput, UiResult};
pub use palette::{extract_palette, PaletteExtractor, COLOR_CHOICES, PALETTE_CLASS};
pub use registry::NodeRegistry;
pub use spec::{HiddenInput, InputKind, InputSpec, NodeSpec, OutputSpec};

use crate::notify::Notifier;

/// A leaf callable in the host's execution graph
pub trait Node: Send + Sync {
    /// Declared inputs, outputs and metadata
    fn spec(&self) -> &NodeSpec;

    /// Run the node once
    ///
    /// # Arguments
    /// * `inputs` - Named values for the declared inputs
    /// * `ctx` - Hidden host context (unique id, prompt, extra metadata)
    /// * `notifier` - Channel for out-of-band UI events
    fn execute(
        &self,
        inputs: &NodeInputs,
        ctx: &NodeContext,
        notifier: &dyn Notifier,
    ) -> Result<NodeOutput, NodeError>;
}
