// Adapters layer: concrete implementations of the ports for data access and display.

pub mod person_source;
pub mod surface;

use crate::config::toml_config::PersonSourceConfig;
use crate::core::PersonSource;

pub use person_source::{InlinePersonSource, JsonFilePersonSource};
pub use surface::{ConsoleSurface, NullSurface};

pub fn person_source_from_config(config: &PersonSourceConfig) -> Box<dyn PersonSource> {
    match config {
        PersonSourceConfig::Inline {
            first_name,
            last_name,
        } => Box::new(InlinePersonSource::new(first_name.as_str(), last_name.as_str())),
        PersonSourceConfig::File { path } => Box::new(JsonFilePersonSource::new(path.as_str())),
    }
}
