use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_api_server")]
    pub api_server: String,

    /// Per-call timeout applied to every outbound request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub insecure_skip_verify: bool,
    #[serde(default)]
    pub ca_cert_path: String,
}

fn default_api_server() -> String {
    "https://api.objectrocket.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve an endpoint stub against the configured API server
    pub fn endpoint_url(&self, stub: &str) -> String {
        format!(
            "{}/{}",
            self.api_server.trim_end_matches('/'),
            stub.trim_start_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_server: default_api_server(),
            timeout_secs: default_timeout_secs(),
            insecure_skip_verify: false,
            ca_cert_path: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_server, "https://api.objectrocket.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.insecure_skip_verify);
        assert!(config.ca_cert_path.is_empty());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_server, "https://api.objectrocket.com");
    }

    #[test]
    fn test_endpoint_url_normalizes_slashes() {
        let mut config = Config::default();
        config.api_server = "https://api.example.com/".to_string();
        assert_eq!(
            config.endpoint_url("/acl/get"),
            "https://api.example.com/acl/get"
        );
        assert_eq!(config.endpoint_url("db"), "https://api.example.com/db");
    }
}
