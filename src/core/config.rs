//! Per-application configuration.
//!
//! An application may carry an `appgen.json` at its root to override where
//! generated modules land and which file extension they use. A missing
//! file yields the defaults; CLI flags override both.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// Config file looked up at the application root.
pub const CONFIG_FILENAME: &str = "appgen.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory for generated controllers, relative to the app root.
    pub controllers_dir: String,
    /// Directory for generated models, relative to the app root.
    pub models_dir: String,
    /// Default file extension for generated modules.
    pub ext: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            controllers_dir: "api/controllers".to_string(),
            models_dir: "api/models".to_string(),
            ext: "js".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config from `<app_path>/appgen.json`, falling back to the
    /// defaults when no file exists.
    pub fn load(app_path: &Path) -> Result<Self> {
        let path = app_path.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = io::read_file(&path, "read appgen.json")?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("controllersDir", &self.controllers_dir),
            ("modelsDir", &self.models_dir),
            ("ext", &self.ext),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config_invalid_value(
                    key,
                    Some(value.clone()),
                    "Value cannot be empty",
                ));
            }
        }
        Ok(())
    }
}
