use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub omdb: OmdbSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Origin allowed by CORS, `*` allows any origin.
    pub frontend_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OmdbSettings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_milliseconds: u64,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `<filename>.json` from the working directory, then lets `APP_*`
/// environment variables override it (`APP_OMDB__API_KEY` sets `omdb.api_key`).
pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let mut builder = Config::builder();
    builder = builder
        .add_source(File::new(filename, FileFormat::Json))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
    let config = builder.build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_joins_host_and_port() {
        let settings = ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 8000,
            frontend_url: "*".to_string(),
        };
        assert_eq!(settings.address(), "127.0.0.1:8000");
    }
}
