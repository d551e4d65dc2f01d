use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pixel_nodes::{
    nodes::{COLOR_CHOICES, INVERT_CLASS, PALETTE_CLASS},
    ImageTensor, JsonLinesNotifier, NodeContext, NodeInputs, NodeRegistry, NodesConfig,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Run the image nodes outside a host. Notifications are printed to stdout
/// as JSON lines; logs go to stderr.
#[derive(Parser)]
#[command(name = "pixel-nodes", version, about)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for temporary preview images
    #[arg(long, global = true)]
    preview_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the declared interface of every registered node
    List,

    /// Invert one or more images of equal size
    Invert {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Where to write the inverted image
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit an invert_preview notification
        #[arg(long)]
        preview: bool,

        /// Save temporary preview PNGs
        #[arg(long)]
        save_preview: bool,

        /// Prompt JSON file to embed in saved previews
        #[arg(long)]
        prompt: Option<PathBuf>,
    },

    /// Extract a color palette from an image
    Palette {
        input: PathBuf,

        #[arg(short = 'k', long, default_value = "5", value_parser = COLOR_CHOICES)]
        num_colors: String,

        /// Fixed seed for a reproducible palette
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => NodesConfig::from_file(path)?,
        None => NodesConfig::default(),
    };
    if let Some(dir) = &cli.preview_dir {
        config.preview.dir = dir.clone();
    }

    let notifier = JsonLinesNotifier::new(std::io::stdout());

    match cli.command {
        Command::List => {
            let registry = NodeRegistry::from_config(&config);
            let specs = serde_json::to_string_pretty(&registry.specs())
                .context("Failed to serialize node specs")?;
            println!("{}", specs);
        }

        Command::Invert {
            inputs,
            output,
            preview,
            save_preview,
            prompt,
        } => {
            config.invert.send_preview |= preview;
            config.invert.save_preview |= save_preview;
            let registry = NodeRegistry::from_config(&config);

            let mut ctx = NodeContext::detached();
            if let Some(path) = prompt {
                ctx = ctx.with_prompt(read_json(&path)?);
            }

            let images = load_images(&inputs)?;
            let start = Instant::now();
            let result = registry.execute(
                INVERT_CLASS,
                &NodeInputs::new().with_image("image_in", images),
                &ctx,
                &notifier,
            )?;
            tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "Inverted batch");

            if let Some(ui) = &result.ui {
                for saved in &ui.images {
                    tracing::info!(filename = %saved.filename, "Preview available");
                }
            }

            if let (Some(path), Some(image_out)) = (output, result.first()) {
                save_images(image_out, &path)?;
            }
        }

        Command::Palette {
            input,
            num_colors,
            seed,
        } => {
            if seed.is_some() {
                config.palette.seed = seed;
            }
            let registry = NodeRegistry::from_config(&config);

            let images = load_images(&[input])?;
            let start = Instant::now();
            registry.execute(
                PALETTE_CLASS,
                &NodeInputs::new()
                    .with_image("image", images)
                    .with_choice("num_colors", num_colors),
                &NodeContext::detached(),
                &notifier,
            )?;
            tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "Extracted palette");
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn load_images(paths: &[PathBuf]) -> Result<ImageTensor> {
    let decoded = paths
        .iter()
        .map(|path| {
            image::open(path).with_context(|| format!("Failed to open image {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let tensor = ImageTensor::from_dynamic_images(&decoded).context("Failed to build image batch")?;
    tracing::debug!(shape = ?tensor.shape(), "Loaded image batch");
    Ok(tensor)
}

/// Write each image of the batch; batches larger than one get an index suffix
fn save_images(images: &ImageTensor, path: &Path) -> Result<()> {
    let rgb = images.to_rgb_images();
    let count = rgb.len();

    for (i, img) in rgb.into_iter().enumerate() {
        let target = if count == 1 {
            path.to_path_buf()
        } else {
            indexed_path(path, i)
        };
        img.save(&target)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::info!(path = %target.display(), "Wrote image");
    }

    Ok(())
}

fn indexed_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, index, ext),
        None => format!("{}_{}", stem, index),
    };
    path.with_file_name(name)
}
