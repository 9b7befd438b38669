use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use log::info;
use reqwest::Url;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub storage_path: PathBuf,
}

impl ClientConfig {
    /// Reads `BOOKREC_API_URL` and `BOOKREC_STORAGE`, after loading a `.env`
    /// file if one is present.
    pub fn load() -> Result<Self, ClientError> {
        dotenv().ok();
        let api_url = env::var("BOOKREC_API_URL").unwrap_or_else(|_| {
            info!("BOOKREC_API_URL not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        let storage_path = env::var("BOOKREC_STORAGE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_storage_path());
        Ok(ClientConfig {
            api_url: parse_api_url(&api_url)?,
            storage_path,
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ClientError> {
        self.api_url = parse_api_url(api_url)?;
        Ok(self)
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw).map_err(|e| ClientError::Config(format!("invalid API URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::Config(format!("API URL {raw:?} cannot be a base")));
    }
    Ok(url)
}

fn default_storage_path() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookrec")
        .join("storage.json")
}
