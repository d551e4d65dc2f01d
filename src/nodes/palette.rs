use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{Node, NodeContext, NodeError, NodeInputs, NodeOutput, NodeSpec};
use crate::clusterer::{kmeans, sample_pixels, KmeansParams, PALETTE_DECIMALS};
use crate::config::PaletteConfig;
use crate::notify::{self, Notifier, PaletteUpdate, PALETTE_UPDATE_EVENT};
use crate::tensor::{ImageTensor, Rgb};

pub const PALETTE_CLASS: &str = "ColorPaletteExtractor";

/// Color counts offered to the user
pub const COLOR_CHOICES: [&str; 3] = ["3", "5", "7"];

/// Representative colors of the first image in a batch
///
/// Samples at most `sample_cap` pixels, clusters them into `k` colors and
/// rounds each channel to three decimals.
pub fn extract_palette<R: Rng + ?Sized>(
    image: &ImageTensor,
    k: usize,
    sample_cap: usize,
    params: &KmeansParams,
    rng: &mut R,
) -> Result<Vec<Rgb>, NodeError> {
    let pixels = image.pixels(0)?;
    let total = pixels.len();
    let samples = sample_pixels(pixels, sample_cap, rng);

    let result = kmeans(&samples, k, params, rng)?;
    debug!(
        k,
        pixels = total,
        samples = samples.len(),
        iterations = result.iterations,
        converged = result.converged,
        "Clustered palette"
    );

    Ok(result.palette(PALETTE_DECIMALS))
}

/// Node reporting a palette for its input while passing the image through
pub struct PaletteExtractor {
    spec: NodeSpec,
    sample_cap: usize,
    params: KmeansParams,
    seed: Option<u64>,
}

impl PaletteExtractor {
    pub fn new() -> Self {
        Self::from_config(&PaletteConfig::default())
    }

    pub fn from_config(config: &PaletteConfig) -> Self {
        let spec = NodeSpec::new(
            PALETTE_CLASS,
            "Color Palette Extractor",
            "image/analysis",
            "extract_palette",
        )
        .image_input("image")
        .choice_input("num_colors", &COLOR_CHOICES, "5")
        .image_output("IMAGE");

        Self {
            spec,
            sample_cap: config.sample_cap,
            params: config.kmeans_params(),
            seed: config.seed,
        }
    }

    /// Use a fixed seed so repeated runs yield identical palettes
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    pub fn extract(&self, image: &ImageTensor, k: usize) -> Result<Vec<Rgb>, NodeError> {
        extract_palette(image, k, self.sample_cap, &self.params, &mut self.rng())
    }
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for PaletteExtractor {
    fn spec(&self) -> &NodeSpec {
        &self.spec
    }

    fn execute(
        &self,
        inputs: &NodeInputs,
        _ctx: &NodeContext,
        notifier: &dyn Notifier,
    ) -> Result<NodeOutput, NodeError> {
        let image = inputs.image("image")?;
        let choice = inputs.choice(&self.spec, "num_colors")?;
        let k: usize = choice.parse().map_err(|_| NodeError::InvalidChoice {
            name: "num_colors".to_string(),
            value: choice.to_string(),
            options: COLOR_CHOICES.iter().map(|s| s.to_string()).collect(),
        })?;

        let colors = self.extract(image, k)?;
        notify::send(notifier, PALETTE_UPDATE_EVENT, &PaletteUpdate::new(colors));

        Ok(NodeOutput::single("IMAGE", image.clone()))
    }
}
