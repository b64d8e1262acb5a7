//! Server configuration

use serde::{Deserialize, Serialize};

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Verbose logging
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            debug: false,
        }
    }
}

impl ServerSettings {
    /// Address string in the form `TcpListener::bind` accepts
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ServerSettings::default();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert!(!settings.debug);
    }

    #[test]
    fn test_bind_addr() {
        let settings = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 9000,
            debug: true,
        };
        assert_eq!(settings.bind_addr(), "0.0.0.0:9000");
    }
}
