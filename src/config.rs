use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{DslResult, Error};

/// Top-level configuration for the DSL processor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProcessorConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Settings for remote include retrieval.
///
/// There is deliberately no timeout here: a remote include blocks the
/// parse until the fetch completes, and callers needing bounded latency
/// must impose one externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("sekkei/{}", env!("CARGO_PKG_VERSION"))
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> DslResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::Internal(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Internal(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> DslResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Internal(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

impl ProcessorConfig {
    // JSONファイルから設定を読み込む
    pub fn from_file(path: &str) -> DslResult<Self> {
        from_file(path)
    }
}
