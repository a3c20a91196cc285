pub mod interactor;
pub mod link;
pub mod module;
pub mod presenter;
pub mod runner;
pub mod view;

pub use crate::domain::model::{GreetingData, Pattern, Person};
pub use crate::domain::ports::{
    GreetingOutput, GreetingProvider, GreetingScene, GreetingView, GreetingViewEventHandler,
    PersonSource, RenderSurface, SettingsProvider,
};
pub use crate::utils::error::Result;
