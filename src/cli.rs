use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Command-line flags. Each one, when given, overrides the config file and
/// environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "courier")]
#[command(about = "Minimal HTTP/1.1 server with echo and file routes")]
pub struct Cli {
    /// Directory served by the /files/ routes
    #[arg(long)]
    pub directory: Option<String>,

    /// Address to listen on
    #[arg(long)]
    pub listen: Option<String>,

    /// YAML config file
    #[arg(long, env = "COURIER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layer defaults, config file, environment and flags, later wins.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_file(path)?.with_env(),
            None => Config::load(),
        };
        if let Some(directory) = self.directory {
            cfg.directory = directory;
        }
        if let Some(listen) = self.listen {
            cfg.listen_addr = listen;
        }
        Ok(cfg)
    }
}
