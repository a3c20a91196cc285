use crate::adapters::person_source::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};
use crate::core::interactor::DEFAULT_GREETING_WORD;
use crate::core::view::DEFAULT_PLACEHOLDER;
use crate::core::{Pattern, SettingsProvider};
use crate::utils::error::{GreetingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_TAPS: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub module: ModuleConfig,
    pub greeting: GreetingTextConfig,
    pub person: PersonSourceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub pattern: Pattern,
    pub taps: usize,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::Viper,
            taps: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingTextConfig {
    pub word: String,
    pub placeholder: String,
}

impl Default for GreetingTextConfig {
    fn default() -> Self {
        Self {
            word: DEFAULT_GREETING_WORD.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PersonSourceConfig {
    Inline {
        #[serde(default = "default_first_name")]
        first_name: String,
        #[serde(default = "default_last_name")]
        last_name: String,
    },
    File {
        path: String,
    },
}

fn default_first_name() -> String {
    DEFAULT_FIRST_NAME.to_string()
}

fn default_last_name() -> String {
    DEFAULT_LAST_NAME.to_string()
}

impl Default for PersonSourceConfig {
    fn default() -> Self {
        PersonSourceConfig::Inline {
            first_name: default_first_name(),
            last_name: default_last_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl GreetingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GreetingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GreetingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING_WORD})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GreetingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("greeting.word", &self.greeting.word)?;
        validation::validate_range("module.taps", self.module.taps, 1, MAX_TAPS)?;

        if let PersonSourceConfig::File { path } = &self.person {
            validation::validate_path("person.path", path)?;
        }

        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format
    }
}

impl SettingsProvider for GreetingConfig {
    fn pattern(&self) -> Pattern {
        self.module.pattern
    }

    fn greeting_word(&self) -> &str {
        &self.greeting.word
    }

    fn placeholder(&self) -> &str {
        &self.greeting.placeholder
    }

    fn taps(&self) -> usize {
        self.module.taps
    }
}

impl Validate for GreetingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
