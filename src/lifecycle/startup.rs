//! Startup configuration resolution.
//!
//! # Responsibilities
//! - Load the optional config file
//! - Apply command-line listener overrides
//! - Validate the result before anything binds
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Overrides are applied before validation so they are checked too

use std::net::SocketAddr;
use std::path::Path;

use crate::config::{read_config, validate_config, AppConfig, ConfigError};

/// Listener overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ListenerOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Produce the validated configuration the process runs with.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ListenerOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };

    apply_overrides(&mut config, overrides);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, overrides: &ListenerOverrides) {
    if overrides.host.is_none() && overrides.port.is_none() {
        return;
    }

    let current = config.listener.bind_address.parse::<SocketAddr>().ok();
    let host = overrides
        .host
        .clone()
        .or_else(|| current.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "0.0.0.0".to_string());
    let port = overrides
        .port
        .or_else(|| current.map(|addr| addr.port()))
        .unwrap_or(8000);

    config.listener.bind_address = if host.contains(':') {
        format!("[{}]:{}", host.trim_start_matches('[').trim_end_matches(']'), port)
    } else {
        format!("{}:{}", host, port)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_overrides() {
        let config = resolve_config(None, &ListenerOverrides::default()).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_port_override_keeps_host() {
        let overrides = ListenerOverrides {
            host: None,
            port: Some(9999),
        };
        let config = resolve_config(None, &overrides).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:9999");
    }

    #[test]
    fn test_host_override_keeps_port() {
        let overrides = ListenerOverrides {
            host: Some("127.0.0.1".into()),
            port: None,
        };
        let config = resolve_config(None, &overrides).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
    }

    #[test]
    fn test_ipv6_host_bracketed() {
        let overrides = ListenerOverrides {
            host: Some("::1".into()),
            port: Some(8080),
        };
        let config = resolve_config(None, &overrides).unwrap();
        assert_eq!(config.listener.bind_address, "[::1]:8080");
    }

    #[test]
    fn test_bad_host_fails_validation() {
        let overrides = ListenerOverrides {
            host: Some("not a host".into()),
            port: None,
        };
        let err = resolve_config(None, &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
