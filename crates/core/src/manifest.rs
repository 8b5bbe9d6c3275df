use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// The slice of `package.json` that autoconf cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Package name, used as the default module name to register.
    pub name: Option<String>,

    /// Integration settings of the host project.
    #[serde(rename = "midway-integration")]
    pub midway_integration: Option<IntegrationSettings>,
}

/// Host-project settings under the `midway-integration` key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationSettings {
    /// Alternate source-code root, relative to the project root.
    #[serde(rename = "tsCodeRoot")]
    pub ts_code_root: Option<String>,
}

impl Manifest {
    /// Load `<dir>/package.json`. A missing manifest is treated as empty.
    pub fn load(dir: &Path) -> Result<Manifest> {
        let path = dir.join("package.json");
        if !path.exists() {
            return Ok(Manifest::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
