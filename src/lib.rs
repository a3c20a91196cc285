pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::build_scene;
pub use config::GreetingConfig;
pub use crate::core::{module::GreetingModule, runner::SceneRunner};
pub use utils::error::{DataError, GreetingError, Result};
