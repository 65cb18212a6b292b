use clap::Parser;
use std::path::PathBuf;

use crate::config::CliOverrides;

/// Bootcamp registration and listing service
#[derive(Parser, Debug)]
#[command(name = "bootcamp-service")]
#[command(version)]
#[command(
    about = "Bootcamp registration and listing service backed by remote capacity and technology services",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./bootcamp-service.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(short, long, value_name = "ADDR")]
    pub listen: Option<String>,

    /// Base URL of the capacity service
    #[arg(long, value_name = "URL")]
    pub capacity_url: Option<String>,

    /// Base URL of the technology service
    #[arg(long, value_name = "URL")]
    pub technology_url: Option<String>,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            listen: self.listen.clone(),
            capacity_url: self.capacity_url.clone(),
            technology_url: self.technology_url.clone(),
        }
    }
}
