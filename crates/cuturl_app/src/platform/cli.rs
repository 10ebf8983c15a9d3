use std::path::PathBuf;

use clap::Parser;
use cuturl_engine::{ClientSettings, DEFAULT_API_URL, DEFAULT_DOMAIN};

use super::logging::{LogDestination, LogLevel};

pub const API_TOKEN_ENV: &str = "CUTURL_API_TOKEN";
pub const API_URL_ENV: &str = "CUTURL_API_URL";
pub const DOMAIN_ENV: &str = "CUTURL_DOMAIN";
pub const DATA_DIR_ENV: &str = "CUTURL_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "CUTURL_LOG_LEVEL";

pub const DEFAULT_DATA_DIR: &str = ".cuturl";

#[derive(Debug, Parser)]
#[command(name = "cuturl", about = "Shorten links with TinyURL and keep a local history")]
pub struct Args {
    /// Bearer token for the shortening service.
    #[arg(long, env = API_TOKEN_ENV, hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Domain the short links are issued under.
    #[arg(long, env = DOMAIN_ENV, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// Directory holding the history snapshot and log file.
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, env = LOG_LEVEL_ENV, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_url: self.api_url.clone(),
            api_token: self.api_token.clone(),
            domain: self.domain.clone(),
            ..ClientSettings::default()
        }
    }
}
