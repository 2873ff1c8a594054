use std::path::Path;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::error::StrobeError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolOptions {
    pub width: usize,
    pub height: usize,
    pub color: String,
    pub fps: f32,
    pub freq: Option<String>,
    pub cycles: Option<u32>,
}

impl ToolOptions {
    pub fn new() -> ToolOptions {
        ToolOptions {
            width: 8,
            height: 4,
            color: "#ffffff".to_string(),
            fps: 10.0,
            freq: None,
            cycles: None,
        }
    }

    pub fn load(path: &Path) -> Result<ToolOptions, StrobeError> {
        ToolOptions::from_config_file(path)
            .map_err(|err| StrobeError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn validate(&self) -> Result<(), StrobeError> {
        if !(self.fps > 0.0) {
            return Err(StrobeError::Config(format!(
                "fps must be greater than 0, got {}",
                self.fps
            )));
        }
        Ok(())
    }
}

impl Default for ToolOptions {
    fn default() -> Self {
        ToolOptions::new()
    }
}
