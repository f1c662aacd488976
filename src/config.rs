use std::env;

pub const DEFAULT_LOG_FILTER: &str = "token_encryptor=warn";

/// Where the operator is told to paste each value. Only affects the guidance text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub properties_file: String,
    pub key_source_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            properties_file: "local.properties".to_string(),
            key_source_file: "MainActivity.kt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            properties_file: lookup("TOKEN_ENCRYPTOR_PROPERTIES_FILE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.properties_file),
            key_source_file: lookup("TOKEN_ENCRYPTOR_KEY_SOURCE_FILE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.key_source_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.properties_file, "local.properties");
        assert_eq!(config.key_source_file, "MainActivity.kt");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TOKEN_ENCRYPTOR_PROPERTIES_FILE", "secrets.properties"),
            ("TOKEN_ENCRYPTOR_KEY_SOURCE_FILE", "   "),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.properties_file, "secrets.properties");
        // Blank values fall back to the default
        assert_eq!(config.key_source_file, "MainActivity.kt");
    }
}
