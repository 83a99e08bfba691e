use std::env;

/// Runtime settings for the catalog server, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "app.db".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            templates_dir: "templates".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from environment variables, falling back to
    /// defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid PORT value `{value}`, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
            templates_dir: lookup("TEMPLATES_DIR").unwrap_or(defaults.templates_dir),
            assets_dir: lookup("ASSETS_DIR").unwrap_or(defaults.assets_dir),
        }
    }

    /// Glob handed to Tera when loading templates.
    pub fn templates_glob(&self) -> String {
        format!("{}/**/*", self.templates_dir.trim_end_matches('/'))
    }
}
