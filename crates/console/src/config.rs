//! Startup configuration for the console process.
//!
//! Read once at startup, not reloadable. Defaults cover the common case;
//! an optional TOML file overrides them, CLI flags override both (applied
//! by the binary).

use std::{
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::ConsoleError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Address the listening socket binds to.
    pub bind_ip: IpAddr,
    /// Port the console listens on for client datagrams.
    pub local_port: u16,
    /// Destination port on the client for operator commands.
    pub game_port: u16,
    /// Fixed client address. Announcements still overwrite it.
    pub peer_ip: Option<IpAddr>,
    /// Session log folder, relative to the working directory.
    pub log_dir: PathBuf,
    /// Session log file name prefix.
    pub log_prefix: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            bind_ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            local_port: 10001,
            game_port: 10002,
            peer_ip: None,
            log_dir: PathBuf::from("Logs"),
            log_prefix: "client_log".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Loads a TOML config file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConsoleError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|err| ConsoleError::InvalidConfig(format!("{}: {err}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployed_ports() {
        let config = ConsoleConfig::default();
        assert_eq!(config.local_port, 10001);
        assert_eq!(config.game_port, 10002);
        assert_eq!(config.peer_ip, None);
        assert_eq!(config.log_dir, PathBuf::from("Logs"));
        assert_eq!(config.log_prefix, "client_log");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let config: ConsoleConfig =
            toml::from_str("local_port = 4000\npeer_ip = \"10.0.0.5\"").unwrap();
        assert_eq!(config.local_port, 4000);
        assert_eq!(config.peer_ip, Some("10.0.0.5".parse().unwrap()));
        assert_eq!(config.game_port, 10002);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<ConsoleConfig, _> = toml::from_str("listen_port = 4000");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConsoleConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.local_port, 10001);
    }

    #[test]
    fn config_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spyglass.toml");
        std::fs::write(&path, "game_port = 9999\nlog_prefix = \"session\"").unwrap();
        let config = ConsoleConfig::load(&path).unwrap();
        assert_eq!(config.game_port, 9999);
        assert_eq!(config.log_prefix, "session");
    }
}
