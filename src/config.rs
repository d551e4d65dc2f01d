use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::clusterer::{KmeansParams, Tolerance, DEFAULT_MAX_ITERS, DEFAULT_SAMPLE_CAP};

/// Settings shared by every node in a registry
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodesConfig {
    pub palette: PaletteConfig,
    pub invert: InvertConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Maximum pixels sampled per image before clustering
    pub sample_cap: usize,
    /// Maximum Lloyd rounds
    pub max_iters: usize,
    pub tolerance: Tolerance,
    /// Fixed seed for reproducible palettes; fresh entropy when unset
    pub seed: Option<u64>,
}

impl PaletteConfig {
    pub fn kmeans_params(&self) -> KmeansParams {
        KmeansParams {
            max_iters: self.max_iters,
            tolerance: self.tolerance,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            sample_cap: DEFAULT_SAMPLE_CAP,
            max_iters: DEFAULT_MAX_ITERS,
            tolerance: Tolerance::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvertConfig {
    /// Clamp inverted samples to [0, 1]
    pub clamp: bool,
    /// Emit an `invert_preview` notification with the output tensor
    pub send_preview: bool,
    /// Save outputs as temporary preview PNGs
    pub save_preview: bool,
}

impl Default for InvertConfig {
    fn default() -> Self {
        Self {
            clamp: true,
            send_preview: false,
            save_preview: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub dir: PathBuf,
    pub prefix: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            dir: std::env::temp_dir().join("pixel-nodes"),
            prefix: "InvertImage".to_string(),
        }
    }
}

impl NodesConfig {
    /// Load and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.palette.sample_cap > 0, "palette.sample_cap must be positive");
        ensure!(self.palette.max_iters > 0, "palette.max_iters must be positive");
        ensure!(
            self.palette.tolerance.rtol >= 0.0 && self.palette.tolerance.atol >= 0.0,
            "palette.tolerance values must be non-negative"
        );
        ensure!(!self.preview.prefix.is_empty(), "preview.prefix must not be empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NodesConfig::default();
        assert_eq!(config.palette.sample_cap, 1000);
        assert_eq!(config.palette.max_iters, 20);
        assert_eq!(config.palette.seed, None);
        assert!(config.invert.clamp);
        assert!(!config.invert.save_preview);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let raw = r#"{"palette": {"seed": 42}, "invert": {"send_preview": true}}"#;
        let config = NodesConfig::from_json_str(raw).unwrap();
        assert_eq!(config.palette.seed, Some(42));
        assert_eq!(config.palette.sample_cap, 1000);
        assert!(config.invert.send_preview);
        assert!(config.invert.clamp);
    }

    #[test]
    fn test_tolerance_override() {
        let raw = r#"{"palette": {"tolerance": {"atol": 0.00001}}}"#;
        let config = NodesConfig::from_json_str(raw).unwrap();
        assert_eq!(config.palette.tolerance.atol, 0.00001);
        assert_eq!(config.palette.tolerance.rtol, 1e-5);
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = NodesConfig::from_json_str(r#"{"palette": {"max_iters": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("max_iters"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(NodesConfig::from_file("/nonexistent/pixel-nodes.json").is_err());
    }
}
