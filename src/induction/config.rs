//! Induction Configuration
//!
//! Parameters of the induction engine, and JSON IO for configuration values.
use crate::errors::TreeError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_max_depth() -> Option<usize> {
    None
}
fn default_parallel() -> bool {
    false
}
fn default_num_threads() -> Option<usize> {
    None
}

/// Configuration for the `TreeInductionEngine`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InductionConfig {
    /// Depth budget. Induction fails rather than split a node at this depth.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Whether sibling subtrees are built in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Number of threads used when building in parallel.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
}

impl Default for InductionConfig {
    fn default() -> Self {
        InductionConfig {
            max_depth: default_max_depth(),
            parallel: default_parallel(),
            num_threads: default_num_threads(),
        }
    }
}

impl InductionConfig {
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.max_depth == Some(0) {
            return Err(TreeError::InvalidParameter(
                String::from("max_depth"),
                String::from("a positive depth or None"),
                String::from("0"),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(TreeError::InvalidParameter(
                String::from("num_threads"),
                String::from("a positive thread count or None"),
                String::from("0"),
            ));
        }
        Ok(())
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration to.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object
    fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, TreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json file.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for InductionConfig {}
