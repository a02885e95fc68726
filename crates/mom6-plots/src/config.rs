//! Plot configuration: credit mark and map decoration styling.
//!
//! Everything has a default, so an empty document is a valid config.
//!
//! ```yaml
//! branding:
//!   text: "Made with ❤️ at m2lines"
//!   font_size: 10
//! coastline:
//!   edge_color: "0.3"
//!   face_color: "0.2"
//!   land: false
//! raster:
//!   width: 1200
//!   height: 900
//! ```

use std::path::Path;

use plot_common::{PlotError, PlotResult};
use renderer::RasterOptions;
use serde::{Deserialize, Serialize};

use crate::annotate::BrandingConfig;
use crate::map::CoastlineConfig;

/// Configuration shared by all entry points of a [`crate::Plotter`], plus image output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub branding: BrandingConfig,
    pub coastline: CoastlineConfig,
    /// Output settings for saved images
    pub raster: RasterOptions,
}

impl PlotConfig {
    pub fn from_yaml(contents: &str) -> PlotResult<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| PlotError::ConfigError(format!("Failed to parse YAML config: {}", e)))
    }

    pub fn from_json(contents: &str) -> PlotResult<Self> {
        serde_json::from_str(contents)
            .map_err(|e| PlotError::ConfigError(format!("Failed to parse JSON config: {}", e)))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlotError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
            other => {
                return Err(PlotError::ConfigError(format!(
                    "Unsupported config extension {:?} for {}",
                    other,
                    path.display()
                )))
            }
        };

        tracing::debug!(path = %path.display(), "Loaded plot config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> PlotResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PlotError::ConfigError(format!("Failed to write YAML config: {}", e)))
    }
}

/// Serde adapter storing colors as matplotlib-style strings (`"0.3"`, `"#ff0000"`, `"black"`).
pub(crate) mod color_spec {
    use plot_common::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r, color.g, color.b, color.a
        ))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Color::parse(&spec).ok_or_else(|| de::Error::custom(format!("invalid color '{}'", spec)))
    }
}
