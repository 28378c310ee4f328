//! Configuration module for the Passerelles backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON document files
    pub data_dir: PathBuf,
    /// Directory where uploaded images are written
    pub uploads_dir: PathBuf,
    /// Directory with the static public site (index, admin panel)
    pub public_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("PASSERELLES_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let uploads_dir = env::var("PASSERELLES_UPLOADS_DIR")
            .unwrap_or_else(|_| "./uploads".to_string())
            .into();

        let public_dir = env::var("PASSERELLES_PUBLIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let bind_addr = env::var("PASSERELLES_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3001".to_string())
            .parse()
            .expect("Invalid PASSERELLES_BIND_ADDR format");

        let log_level = env::var("PASSERELLES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            uploads_dir,
            public_dir,
            bind_addr,
            log_level,
        }
    }

    /// Path of the speaker roster document.
    pub fn speakers_path(&self) -> PathBuf {
        self.data_dir.join("speakers.json")
    }

    /// Path of the page-copy content document.
    pub fn content_path(&self) -> PathBuf {
        self.data_dir.join("content.json")
    }
}
