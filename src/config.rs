//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST`: bind address, defaults to the Leptos `site-addr` host
//! - `PORT`: bind port, defaults to the Leptos `site-addr` port
//! - `SITE_ROOT`: directory holding compiled assets (overrides `site-root`)

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build config from the environment, falling back to `defaults` for the
    /// bind address.
    pub fn from_env(defaults: SocketAddr) -> Result<Self, ServerError> {
        let ip = parse_host(std::env::var("HOST").ok().as_deref(), defaults.ip())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref(), defaults.port())?;
        let site_root = parse_site_root(std::env::var("SITE_ROOT").ok());
        Ok(Self { addr: SocketAddr::new(ip, port), site_root })
    }
}

fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid HOST '{value}': {e}"))),
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid PORT '{value}': {e}"))),
    }
}

fn parse_site_root(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
