use crate::config::toml_config::{GreetingConfig, LogFormat, PersonSourceConfig};
use crate::core::Pattern;
use crate::utils::error::{GreetingError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "viper-greeting")]
#[command(about = "Tap a button, get a greeting: VIPER, MVP, MVVM and MVC side by side")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Architecture pattern to assemble (overrides config)
    #[arg(short, long, value_enum)]
    pub pattern: Option<Pattern>,

    /// Number of button taps to deliver (overrides config)
    #[arg(short, long)]
    pub taps: Option<usize>,

    /// First name for the inline person (overrides config)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name for the inline person (overrides config)
    #[arg(long)]
    pub last_name: Option<String>,

    /// Greeting word (overrides config)
    #[arg(long)]
    pub greeting: Option<String>,

    /// Don't echo the label to stdout while running
    #[arg(short, long)]
    pub quiet: bool,

    /// Log output format (overrides config)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults) and applies command line overrides on top.
    pub fn resolve(&self) -> Result<GreetingConfig> {
        let mut config = match &self.config {
            Some(path) => GreetingConfig::from_file(path)?,
            None => GreetingConfig::default(),
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Name flags only apply to the inline person; combined with a file source they are rejected.
    pub fn apply_overrides(&self, config: &mut GreetingConfig) -> Result<()> {
        if let Some(pattern) = self.pattern {
            config.module.pattern = pattern;
        }
        if let Some(taps) = self.taps {
            config.module.taps = taps;
        }
        if let Some(word) = &self.greeting {
            config.greeting.word = word.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        if self.first_name.is_none() && self.last_name.is_none() {
            return Ok(());
        }

        match &mut config.person {
            PersonSourceConfig::Inline {
                first_name,
                last_name,
            } => {
                if let Some(name) = &self.first_name {
                    *first_name = name.clone();
                }
                if let Some(name) = &self.last_name {
                    *last_name = name.clone();
                }
                Ok(())
            }
            // 檔案來源時姓名由檔案提供，不允許混用
            PersonSourceConfig::File { path } => Err(GreetingError::InvalidConfigValueError {
                field: "person.type".to_string(),
                value: format!("file ({})", path),
                reason: "--first-name/--last-name only apply to an inline person".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SettingsProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["viper-greeting"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config, GreetingConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = CliConfig::parse_from([
            "viper-greeting",
            "--pattern",
            "mvp",
            "--taps",
            "2",
            "--greeting",
            "Hi",
            "--last-name",
            "Lovelace",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.pattern(), Pattern::Mvp);
        assert_eq!(config.taps(), 2);
        assert_eq!(config.greeting_word(), "Hi");
        assert_eq!(
            config.person,
            PersonSourceConfig::Inline {
                first_name: "Qian".to_string(),
                last_name: "Lovelace".to_string(),
            }
        );
    }

    #[test]
    fn test_name_flags_rejected_for_file_source() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[person]\ntype = \"file\"\npath = \"ada.json\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let cli = CliConfig::parse_from(["viper-greeting", "--config", path, "--first-name", "Grace"]);
        let err = cli.resolve().unwrap_err();
        assert!(matches!(err, GreetingError::InvalidConfigValueError { .. }));
        assert_eq!(err.exit_code(), 1);

        let cli = CliConfig::parse_from(["viper-greeting", "--config", path]);
        assert_eq!(
            cli.resolve().unwrap().person,
            PersonSourceConfig::File {
                path: "ada.json".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_flag_value_is_a_parse_error() {
        let err = CliConfig::try_parse_from(["viper-greeting", "--taps", "abc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["viper-greeting", "--config", "/nonexistent/greeting.toml"]);
        assert!(cli.resolve().is_err());
    }
}
