use serde::Deserialize;

impl Config {

    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml dir from env, with default
        let config_path =
            std::env::var("FILMQUERY_CONFIG_PATH").unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml
            .add_source(config::File::with_name(&config_path))
            // Add in settings from the environment (with a prefix of FILMQUERY)
            .add_source(config::Environment::with_prefix("FILMQUERY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct Config {
    pub logs: LogsConfig,
    pub catalog: CatalogConfig,
    pub report: ReportConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct LogsConfig {
    pub level: String,
}

// ===============================================================================
// Catalog
// ===============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(unused)]
pub struct CatalogConfig {
    /// Local JSON file holding an array of movies.
    #[serde(default)]
    pub path: Option<String>,
    /// Remote JSON endpoint; wins over `path` when both are set.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

// ===============================================================================
// Report
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
#[allow(unused)]
pub struct ReportConfig {
    pub year: i32,
    pub actor: String,
    pub director: String,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn parses_full_config() {
        let cfg = from_toml(
            r#"
            [logs]
            level = "debug"

            [catalog]
            path = "./data/movies.json"

            [report]
            year = 1992
            actor = "Gene Hackman"
            director = "Clint Eastwood"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.catalog.path.as_deref(), Some("./data/movies.json"));
        assert_eq!(cfg.catalog.url, None);
        assert_eq!(cfg.catalog.timeout_secs, 30);
        assert_eq!(cfg.report.year, 1992);
        assert_eq!(cfg.report.format, ReportFormat::Json);
    }

    #[test]
    fn missing_query_argument_is_rejected() {
        let res = from_toml(
            r#"
            [logs]
            level = "info"

            [catalog]
            path = "./data/movies.json"

            [report]
            year = 1992
            director = "Clint Eastwood"
            "#,
        );

        assert!(res.is_err());
    }
}
