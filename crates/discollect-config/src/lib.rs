// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the Discogs client.
//!
//! Nothing here is required: [`ClientConfig::default`] talks to the public
//! Discogs API. [`load`] layers an optional TOML file and `DISCOGS_`
//! environment variables on top of those defaults.

use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "api.discogs.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Discollect/",
    env!("CARGO_PKG_VERSION"),
    " ( https://github.com/discollect/discollect )"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub scheme: String,
    /// Host name, optionally with a port (`localhost:8080`).
    pub host: String,
    pub user_agent: String,
    /// Page size sent as `per_page` on paginated endpoints.
    pub per_page: u32,
    /// Request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// `scheme://host`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}",
            self.scheme.trim_end_matches("://"),
            self.host.trim_end_matches('/')
        )
    }
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: DISCOGS_).
pub fn load(config_path: Option<&Path>) -> Result<ClientConfig> {
    let mut figment = Figment::from(Serialized::defaults(ClientConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("DISCOGS_").split("__"));

    let config: ClientConfig = figment.extract()?;
    info!(target: "config", host = %config.host, per_page = config.per_page, "configuration loaded");
    Ok(config)
}
