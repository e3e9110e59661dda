//! Policy configuration loading.
//!
//! This module loads a [`PolicyConfig`] from a YAML document on disk. A
//! missing file is an error: deployments that want the compiled-in policy
//! construct `PolicyConfig::default()` instead of pointing at a path.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

impl PolicyConfig {
    /// Loads the spending policy from a YAML file.
    ///
    /// Fields absent from the document keep their compiled-in defaults, so
    /// a deployment can override a single ceiling without restating the
    /// whole limit table.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy YAML document
    ///
    /// # Returns
    ///
    /// Returns the parsed policy, [`EngineError::ConfigNotFound`] when the
    /// file is missing or unreadable, or [`EngineError::ConfigParse`] when
    /// it is not valid policy YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use expense_engine::config::PolicyConfig;
    ///
    /// let policy = PolicyConfig::load("./config/policy.yaml")?;
    /// # Ok::<(), expense_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}
