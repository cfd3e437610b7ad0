use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080, also used when the value is not a port)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = parse_port(env::var("SERVICE_PORT").ok().as_deref());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid SERVICE_PORT {:?}, using {}", value, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 3000,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:3000");
    }

    #[test]
    fn should_parse_configured_port() {
        assert_eq!(parse_port(Some("3000")), 3000);
    }

    #[test]
    fn should_fall_back_to_default_port() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("not-a-port")), 8080);
        assert_eq!(parse_port(Some("70000")), 8080);
    }
}
