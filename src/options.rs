//! Viewer options with TOML preset support.
//!
//! All tweakable settings of the browsing core are consolidated here
//! and serialize to/from TOML. Defaults carry the fixed deployment
//! values (dataset asset path, structure URL template, black stage
//! background), so a host that never touches options gets the stock
//! behavior. All fields use `#[serde(default)]` so partial TOML files
//! work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::ZOOM_STEP_FRACTION;
use crate::dataset::DATASET_ASSET;
use crate::error::PlasviewError;
use crate::source::STRUCTURE_URL_TEMPLATE;
use crate::stage::StageOptions;

/// Top-level options container for the browsing core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    /// Stage construction options.
    pub stage: StageOptions,
    /// Licorice stick scale for the ligand representation.
    pub ligand_scale: f32,
    /// Fraction of the camera depth applied per manual zoom step.
    pub zoom_step: f32,
    /// Relative path of the dataset asset.
    pub dataset_path: String,
    /// URL template for structure payloads; `{id}` is replaced by the
    /// structure identifier.
    pub structure_url: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            stage: StageOptions::default(),
            ligand_scale: 2.0,
            zoom_step: ZOOM_STEP_FRACTION,
            dataset_path: DATASET_ASSET.to_owned(),
            structure_url: STRUCTURE_URL_TEMPLATE.to_owned(),
        }
    }
}

impl ViewerOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PlasviewError> {
        let content =
            std::fs::read_to_string(path).map_err(PlasviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PlasviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PlasviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlasviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlasviewError::Io)?;
        }
        std::fs::write(path, content).map_err(PlasviewError::Io)
    }
}
