use std::{env, fs, path::Path};

use anyhow::Result;
use serde::Deserialize;

const DEFAULT_DB_URL: &str = "tasktrail.db";
const DEFAULT_DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DEFAULT_DB_CONNECTION_POOL_SIZE,
        }
    }
}

impl Cfg {
    /// Reads the optional TOML file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        Ok(cfg)
    }
}
