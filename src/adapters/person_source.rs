use crate::core::{Person, PersonSource};
use crate::utils::error::DataError;
use std::path::PathBuf;

pub const DEFAULT_FIRST_NAME: &str = "Qian";
pub const DEFAULT_LAST_NAME: &str = "Yang Biao";

/// Hands out the same person on every request.
#[derive(Debug, Clone)]
pub struct InlinePersonSource {
    first_name: String,
    last_name: String,
}

impl InlinePersonSource {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Default for InlinePersonSource {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME)
    }
}

impl PersonSource for InlinePersonSource {
    fn fetch_person(&self) -> Result<Person, DataError> {
        Ok(Person::new(self.first_name.as_str(), self.last_name.as_str()))
    }
}

/// Reads `{"first_name": ..., "last_name": ...}` from disk on every request.
#[derive(Debug, Clone)]
pub struct JsonFilePersonSource {
    path: PathBuf,
}

impl JsonFilePersonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PersonSource for JsonFilePersonSource {
    fn fetch_person(&self) -> Result<Person, DataError> {
        tracing::debug!("reading person from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DataError::unavailable(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DataError::malformed(format!("{}: {}", self.path.display(), e)))
    }
}
