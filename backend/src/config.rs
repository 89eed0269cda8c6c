//! Server settings read from the environment.
//!
//! | variable       | default           |
//! |----------------|-------------------|
//! | `HOST`         | `127.0.0.1`       |
//! | `PORT`         | `3002`            |
//! | `PRODUCTS_DB`  | `products.sqlite` |
//! | `OPEN_BROWSER` | `true`            |
//!
//! `PRODUCTS_DB=:memory:` keeps the catalog in memory for the process lifetime.

use std::env;

use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3002,
            database: "products.sqlite".to_string(),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unparseable values fall
    /// back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let open_browser = match lookup("OPEN_BROWSER").map(|v| v.trim().to_lowercase()) {
            Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
            Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
            Some(v) => {
                warn!("Ignoring invalid OPEN_BROWSER {:?}", v);
                defaults.open_browser
            }
            None => defaults.open_browser,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database: lookup("PRODUCTS_DB").unwrap_or(defaults.database),
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_variables() {
        let cfg = config(&[]);
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.url(), "http://127.0.0.1:3002");
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("PRODUCTS_DB", ":memory:"),
            ("OPEN_BROWSER", "false"),
        ]);
        assert_eq!(cfg.url(), "http://0.0.0.0:8080");
        assert_eq!(cfg.database, ":memory:");
        assert!(!cfg.open_browser);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[("PORT", "eighty"), ("OPEN_BROWSER", "maybe")]);
        assert_eq!(cfg.port, 3002);
        assert!(cfg.open_browser);
    }
}
