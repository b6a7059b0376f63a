//! Configuration file loading for vernis.
//!
//! Reads `vernis.config.json` from the current working directory.
//! Also provides the JSON Schema for editor autocompletion.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vernis_relief::{RenderFlags, RenderOptions};

pub const CONFIG_FILE: &str = "vernis.config.json";

/// Top-level vernis configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VernisConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration for the `gallery` command.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub title: String,

    /// Output directory, relative to the working directory.
    pub out_dir: PathBuf,

    /// Prefix for links between generated documentation pages.
    pub base_path: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Vernis Gallery".to_string(),
            out_dir: PathBuf::from("vernis-gallery"),
            base_path: String::new(),
        }
    }
}

/// Output settings shared by every rendering command.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Emit `data-slot` attributes.
    pub data_slot: bool,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Seed for generated element ids.
    pub seed: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            data_slot: true,
            pretty: false,
            seed: "vernis".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::with_seed(&self.seed);
        options.flags.set(RenderFlags::DATA_SLOT, self.data_slot);
        options
    }

    /// Serialize `value` as JSON, pretty-printed when configured.
    pub fn to_json<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

/// Load `vernis.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults. A file that cannot be read or parsed
/// is reported as a warning and also yields the defaults.
pub fn load_config(dir: Option<&Path>) -> VernisConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file; using defaults");
        return VernisConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %config_path.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                VernisConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            VernisConfig::default()
        }
    }
}

/// JSON Schema for `vernis.config.json`.
pub const VERNIS_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Vernis Configuration",
  "description": "Configuration file for vernis - variant-driven server-rendered components",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "gallery": {
      "type": "object",
      "description": "Gallery and documentation output",
      "properties": {
        "title": { "type": "string", "default": "Vernis Gallery" },
        "outDir": { "type": "string", "default": "vernis-gallery" },
        "basePath": {
          "type": "string",
          "description": "Prefix for links between generated documentation pages",
          "default": ""
        }
      },
      "additionalProperties": false
    },
    "render": {
      "type": "object",
      "description": "Output settings shared by every rendering command",
      "properties": {
        "dataSlot": {
          "type": "boolean",
          "description": "Emit data-slot attributes naming each component part",
          "default": true
        },
        "pretty": {
          "type": "boolean",
          "description": "Pretty-print JSON output",
          "default": false
        },
        "seed": {
          "type": "string",
          "description": "Seed for generated element ids",
          "default": "vernis"
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;
