//! Configuration management for recolor.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::colormaps;
use crate::error::{RecolorError, Result};
use crate::transform::OutputFormat;

/// Command-line arguments for the recolor server
#[derive(Parser, Debug)]
#[command(name = "recolor")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "RECOLOR_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "RECOLOR_PORT")]
    pub port: Option<u16>,

    /// Number of worker threads
    #[arg(short, long, env = "RECOLOR_WORKERS")]
    pub workers: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "RECOLOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RECOLOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Colormap used when a request does not name one
    #[arg(long, env = "RECOLOR_DEFAULT_COLORMAP")]
    pub default_colormap: Option<String>,

    /// Largest accepted upload, in bytes
    #[arg(long, env = "RECOLOR_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: Option<usize>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Image processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Colormap used when a request does not name one
    #[serde(default = "default_colormap")]
    pub default_colormap: String,

    /// Output format used when a request does not name one (png or jpeg)
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Largest accepted upload, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Image configuration
    #[serde(default)]
    pub image: ImageConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from parsed arguments, reading the JSON file they point to
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if args.workers.is_some() {
            config.server.workers = args.workers;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if let Some(colormap) = args.default_colormap {
            config.image.default_colormap = colormap;
        }
        if let Some(limit) = args.max_upload_bytes {
            config.image.max_upload_bytes = limit;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server.host = other.server.host;
        self.server.port = other.server.port;
        if other.server.workers.is_some() {
            self.server.workers = other.server.workers;
        }
        self.image = other.image;
        self.log_level = other.log_level;
    }

    /// Default output format, parsed
    pub fn default_format(&self) -> Result<OutputFormat> {
        self.image.default_format.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(RecolorError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // 0 is not a valid port for users
        if self.server.port == 0 {
            return Err(RecolorError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.workers == Some(0) {
            return Err(RecolorError::Config {
                message: "Worker count cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RecolorError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if !colormaps::is_known(&self.image.default_colormap) {
            return Err(RecolorError::Config {
                message: format!(
                    "Invalid default colormap: {}",
                    self.image.default_colormap
                ),
            });
        }

        if self.default_format().is_err() {
            return Err(RecolorError::Config {
                message: format!(
                    "Invalid default format: {}. Must be one of: png, jpeg",
                    self.image.default_format
                ),
            });
        }

        if self.image.max_upload_bytes == 0 {
            return Err(RecolorError::Config {
                message: "Upload limit cannot be 0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            image: ImageConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_colormap: default_colormap(),
            default_format: default_format(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_colormap() -> String {
    "viridis".to_string()
}

fn default_format() -> String {
    "png".to_string()
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}
