use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::core::errors::{Error, Result};

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_ENDPOINT: &str = "/mcp";
pub const DEFAULT_HEARTBEAT_SECS: u64 = 30;
pub const DEFAULT_SCHEME: &str = "fs";

/// Command line surface of the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "dirlist-mcp", version, about = "Directory listing MCP server")]
pub struct Args {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "DIRLIST_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Path of the MCP endpoint.
    #[arg(long, env = "DIRLIST_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds between heartbeat pings on the event stream.
    #[arg(long, env = "DIRLIST_HEARTBEAT_SECS", default_value_t = DEFAULT_HEARTBEAT_SECS)]
    pub heartbeat_secs: u64,

    /// Scheme of the directory resource URIs (`<scheme>://dir/<path>`).
    #[arg(long, env = "DIRLIST_SCHEME", default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "DIRLIST_LOG", default_value = "info")]
    pub log_filter: String,
}

/// Everything the server needs, built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub bind: SocketAddr,
    pub endpoint: String,
    pub heartbeat: Duration,
    pub scheme: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            heartbeat: Duration::from_secs(DEFAULT_HEARTBEAT_SECS),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.heartbeat.is_zero() {
            return Err(Error::Other("heartbeat interval must be positive".into()));
        }
        if self.scheme.is_empty() || self.scheme.contains([':', '/']) {
            return Err(Error::Other(format!(
                "invalid resource scheme: {:?}",
                self.scheme
            )));
        }
        if !self.endpoint.starts_with('/') || self.endpoint == "/" {
            return Err(Error::Other(format!(
                "endpoint must be a path below '/': {:?}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let config = ServerConfig {
            bind: args.bind,
            endpoint: args.endpoint,
            heartbeat: Duration::from_secs(args.heartbeat_secs),
            scheme: args.scheme,
            ..ServerConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_into_valid_config() {
        let args = Args::parse_from(["dirlist-mcp"]);
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.endpoint, "/mcp");
        assert_eq!(config.heartbeat, Duration::from_secs(30));
        assert_eq!(config.scheme, "fs");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "dirlist-mcp",
            "--bind",
            "127.0.0.1:9000",
            "--scheme",
            "macos",
            "--heartbeat-secs",
            "5",
        ]);
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.bind, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.scheme, "macos");
        assert_eq!(config.heartbeat, Duration::from_secs(5));
    }

    #[test]
    fn rejects_zero_heartbeat_and_bad_scheme() {
        let args = Args::parse_from(["dirlist-mcp", "--heartbeat-secs", "0"]);
        assert!(ServerConfig::try_from(args).is_err());

        let config = ServerConfig {
            scheme: "fs://".into(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            endpoint: "/".into(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
