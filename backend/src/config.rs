use crate::state::Catalog;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Command line / environment configuration for the layout service.
#[derive(Debug, Clone, Parser)]
#[command(name = "layout-backend", about = "Shop floor layout validation service")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "LAYOUT_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// JSON file mapping equipment id -> {name, widthFt, depthFt}
    #[arg(long, env = "LAYOUT_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Load the startup catalog, empty when no file is configured.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog else {
            return Ok(Catalog::new());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.clone(),
            source,
        })
    }
}
