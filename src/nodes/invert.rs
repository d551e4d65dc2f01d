use super::{HiddenInput, Node, NodeContext, NodeError, NodeInputs, NodeOutput, NodeSpec, UiResult};
use crate::config::{InvertConfig, PreviewConfig};
use crate::notify::{self, ImagePreview, InvertPreview, Notifier, PreviewData, INVERT_PREVIEW_EVENT};
use crate::preview::PreviewStore;
use crate::tensor::ImageTensor;

pub const INVERT_CLASS: &str = "InvertImage";

/// Photometric negative: every sample `v` becomes `1 - v`
pub fn invert(image: &ImageTensor) -> ImageTensor {
    image.map(|v| 1.0 - v)
}

/// Negative clamped to [0, 1], for inputs that may leave the normalized range
pub fn invert_clamped(image: &ImageTensor) -> ImageTensor {
    image.map(|v| (1.0 - v).clamp(0.0, 1.0))
}

/// Node producing the negative of its input image
pub struct InvertImage {
    spec: NodeSpec,
    clamp: bool,
    send_preview: bool,
    store: Option<PreviewStore>,
}

impl InvertImage {
    pub fn new() -> Self {
        Self {
            spec: Self::build_spec(false, false),
            clamp: true,
            send_preview: false,
            store: None,
        }
    }

    pub fn from_config(invert: &InvertConfig, preview: &PreviewConfig) -> Self {
        let store = invert
            .save_preview
            .then(|| PreviewStore::new(&preview.dir, preview.prefix.clone()));

        Self {
            spec: Self::build_spec(invert.send_preview, store.is_some()),
            clamp: invert.clamp,
            send_preview: invert.send_preview,
            store,
        }
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_preview_notifications(mut self, enabled: bool) -> Self {
        self.send_preview = enabled;
        self.spec = Self::build_spec(enabled, self.store.is_some());
        self
    }

    /// Save every output as a temporary preview and report it as a UI result
    pub fn with_preview_store(mut self, store: PreviewStore) -> Self {
        self.store = Some(store);
        self.spec = Self::build_spec(self.send_preview, true);
        self
    }

    fn build_spec(send_preview: bool, save_preview: bool) -> NodeSpec {
        let spec = NodeSpec::new(INVERT_CLASS, "Invert Image Node Sample", "example", "invert")
            .image_input("image_in")
            .image_output("image_out")
            .output_node(save_preview);

        if send_preview || save_preview {
            spec.hidden_inputs(&[
                HiddenInput::UniqueId,
                HiddenInput::Prompt,
                HiddenInput::ExtraPnginfo,
            ])
        } else {
            spec
        }
    }

    pub fn apply(&self, image: &ImageTensor) -> ImageTensor {
        if self.clamp {
            invert_clamped(image)
        } else {
            invert(image)
        }
    }
}

impl Default for InvertImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for InvertImage {
    fn spec(&self) -> &NodeSpec {
        &self.spec
    }

    fn execute(
        &self,
        inputs: &NodeInputs,
        ctx: &NodeContext,
        notifier: &dyn Notifier,
    ) -> Result<NodeOutput, NodeError> {
        let image_out = self.apply(inputs.image("image_in")?);

        if self.send_preview {
            let preview = InvertPreview {
                node_id: ctx.unique_id.clone(),
                preview_data: PreviewData {
                    image_out: ImagePreview {
                        shape: image_out.shape(),
                        data: image_out.to_nested(),
                    },
                },
            };
            notify::send(notifier, INVERT_PREVIEW_EVENT, &preview);
        }

        let ui = match &self.store {
            Some(store) => Some(UiResult {
                images: store.save_batch(&image_out, &ctx.png_text())?,
            }),
            None => None,
        };

        let output = NodeOutput::single("image_out", image_out);
        Ok(match ui {
            Some(ui) => output.with_ui(ui),
            None => output,
        })
    }
}
