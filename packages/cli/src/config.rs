use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "collage.config.json";

/// Collage configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Template used when `new` is run without `--template`
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Directory rendered previews land in
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_template() -> String {
    "blank".to_string()
}

fn default_out_dir() -> String {
    "preview".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults when no
    /// file exists.
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Absolute path to the preview output directory.
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            out_dir: default_out_dir(),
        }
    }
}
