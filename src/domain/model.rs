use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity. Usually richer in a real app (a database row, a remote record).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Transport structure handed from the interactor to the presenter. Not an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingData {
    pub greeting: String,
    pub subject: String,
}

impl GreetingData {
    pub fn new(greeting: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            subject: subject.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Viper,
    Mvp,
    Mvvm,
    Mvc,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Viper => "viper",
            Pattern::Mvp => "mvp",
            Pattern::Mvvm => "mvvm",
            Pattern::Mvc => "mvc",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "viper" => Ok(Pattern::Viper),
            "mvp" => Ok(Pattern::Mvp),
            "mvvm" => Ok(Pattern::Mvvm),
            "mvc" => Ok(Pattern::Mvc),
            other => Err(format!("unknown pattern: {}", other)),
        }
    }
}
