//! Configuration types for the constraint engine.
//!
//! All types implement [`serde::Deserialize`] and default every field, so a
//! partial configuration file only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayerConfig`] - Controls how layer bands are derived from node geometry.
//! - [`InteractionConfig`] - Controls how drag gestures are committed.
//!
//! # Example
//!
//! ```
//! # use layerpin::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layers().padding(), 10.0);
//! assert!(config.interaction().refuse_forbidden());
//! ```

use serde::Deserialize;

/// Margin added on both sides of the band when a level has a single layer.
pub const DEFAULT_LAYER_PADDING: f32 = 10.0;

/// Top-level configuration combining layer and interaction settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layer band configuration section.
    #[serde(default)]
    layers: LayerConfig,

    /// Drag interaction configuration section.
    #[serde(default)]
    interaction: InteractionConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layers: LayerConfig, interaction: InteractionConfig) -> Self {
        Self {
            layers,
            interaction,
        }
    }

    /// Returns the layer band configuration.
    pub fn layers(&self) -> &LayerConfig {
        &self.layers
    }

    /// Returns the interaction configuration.
    pub fn interaction(&self) -> &InteractionConfig {
        &self.interaction
    }
}

/// How layer bands are derived from node geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerConfig {
    /// Horizontal margin applied to both sides of a lone layer.
    #[serde(default = "default_padding")]
    padding: f32,
}

fn default_padding() -> f32 {
    DEFAULT_LAYER_PADDING
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_LAYER_PADDING,
        }
    }
}

impl LayerConfig {
    /// Creates a new [`LayerConfig`] with the given lone-layer padding.
    pub fn new(padding: f32) -> Self {
        Self { padding }
    }

    /// Returns the lone-layer padding.
    pub fn padding(&self) -> f32 {
        self.padding
    }
}

/// How drag gestures are committed.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionConfig {
    /// Drop no constraint when the target layer is forbidden.
    #[serde(default = "default_refuse_forbidden")]
    refuse_forbidden: bool,
}

fn default_refuse_forbidden() -> bool {
    true
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            refuse_forbidden: true,
        }
    }
}

impl InteractionConfig {
    /// Creates a new [`InteractionConfig`].
    pub fn new(refuse_forbidden: bool) -> Self {
        Self { refuse_forbidden }
    }

    /// Returns whether forbidden drops are refused at commit.
    pub fn refuse_forbidden(&self) -> bool {
        self.refuse_forbidden
    }
}
