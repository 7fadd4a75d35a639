use marquee_render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "marquee.config.json";

/// Marquee configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<section>.json` records
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Directory file-backed saves are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Pretty print rendered HTML
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_out_dir() -> String {
    "out".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the content directory
    pub fn get_content_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.content_dir)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            pretty: self.pretty,
            ..RenderOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            out_dir: default_out_dir(),
            pretty: default_pretty(),
        }
    }
}
