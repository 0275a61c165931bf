pub mod source;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "chatter-box")]
#[command(about = "Pick a random conversation topic from a category")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Topics document: a file path or an http(s) URL
    #[arg(short, long)]
    pub source: Option<String>,

    /// Category to draw from
    #[arg(long)]
    pub category: Option<String>,

    /// Number of independent draws
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// List categories and exit
    #[arg(long)]
    pub list: bool,

    /// Run the interactive picker on stdin/stdout
    #[arg(short, long)]
    pub interactive: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Delay before a new topic is revealed (interactive mode)
    #[arg(long)]
    pub reveal_delay_ms: Option<u64>,

    /// Request timeout for http(s) sources
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Effective settings after merging command line flags over the TOML file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: String,
    pub reveal_delay: Duration,
    pub request_timeout: Option<Duration>,
    pub default_category: Option<String>,
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            source: file.source_location().to_string(),
            reveal_delay: file.reveal_delay(),
            request_timeout: file.request_timeout(),
            default_category: file.default_category().map(str::to_string),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定：命令列 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut settings = Settings::from_toml(&file);
        if let Some(source) = &self.source {
            settings.source = source.clone();
        }
        if let Some(delay) = self.reveal_delay_ms {
            settings.reveal_delay = Duration::from_millis(delay);
        }
        if let Some(timeout) = self.timeout_secs {
            settings.request_timeout = Some(Duration::from_secs(timeout));
        }
        if let Some(category) = &self.category {
            settings.default_category = Some(category.clone());
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_range("count", self.count, 1, 10_000)?;
        if let Some(category) = &self.category {
            validate_non_empty_string("category", category)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn source_location(&self) -> &str {
        &self.source
    }

    fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    fn default_category(&self) -> Option<&str> {
        self.default_category.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_location("source", &self.source)?;
        validate_range(
            "reveal_delay_ms",
            self.reveal_delay.as_millis() as u64,
            0,
            60_000,
        )?;
        if let Some(timeout) = self.request_timeout {
            validate_range("timeout_secs", timeout.as_secs(), 1, 300)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["chatter-box"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.source, toml_config::DEFAULT_SOURCE);
        assert_eq!(settings.reveal_delay, Duration::ZERO);
        assert!(settings.default_category.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chatter-box.toml");
        std::fs::write(
            &path,
            r#"
[source]
location = "https://example.com/topics.json"
timeout_seconds = 20

[display]
reveal_delay_ms = 500
default_category = "Icebreakers"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "chatter-box",
            "--config",
            path.to_str().unwrap(),
            "--source",
            "./local.json",
            "--category",
            "Deep",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.source, "./local.json");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(20)));
        assert_eq!(settings.reveal_delay, Duration::from_millis(500));
        assert_eq!(settings.default_category.as_deref(), Some("Deep"));
    }

    #[test]
    fn test_invalid_cli_values() {
        let cli = CliConfig::parse_from(["chatter-box", "--source", "ftp://example.com/t.json"]);
        assert!(cli.resolve().is_err());

        let cli = CliConfig::parse_from(["chatter-box", "--count", "0"]);
        assert!(cli.validate().is_err());

        let cli = CliConfig::parse_from(["chatter-box", "--category", "  "]);
        assert!(cli.validate().is_err());
    }
}
