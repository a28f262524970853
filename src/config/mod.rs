pub mod models;

pub use models::{Config, Target};

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};

/// Load the configuration from a JSON file.
pub fn load(path: &Path) -> Result<Config> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open config file: {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
