use crate::core::link::Link;
use crate::domain::model::GreetingData;
use crate::domain::ports::{GreetingOutput, GreetingProvider, GreetingView, GreetingViewEventHandler};
use crate::utils::error::{DataError, Result};
use std::rc::Weak;

/// Display string for a piece of transport data: greeting, one space, subject.
pub fn format_greeting(greeting_data: &GreetingData) -> String {
    format!("{} {}", greeting_data.greeting, greeting_data.subject)
}

/// Message shown in place of a greeting when the interactor could not get its data.
pub fn format_error(error: &DataError) -> String {
    match error {
        DataError::Unavailable { reason } => format!("Nobody to greet ({})", reason),
        DataError::Malformed { reason } => format!("Could not read who to greet ({})", reason),
    }
}

/// Sits between view and interactor. Only knows the view through [`GreetingView`]
/// and never touches the entity.
pub struct GreetingPresenter {
    view: Link<dyn GreetingView>,
    greeting_provider: Link<dyn GreetingProvider>,
}

impl GreetingPresenter {
    pub fn new() -> Self {
        Self {
            view: Link::new("presenter.view"),
            greeting_provider: Link::new("presenter.greeting_provider"),
        }
    }

    pub fn attach_view(&self, view: Weak<dyn GreetingView>) {
        self.view.connect(view);
    }

    pub fn attach_provider(&self, provider: Weak<dyn GreetingProvider>) {
        self.greeting_provider.connect(provider);
    }

    pub fn is_wired(&self) -> bool {
        self.view.is_connected() && self.greeting_provider.is_connected()
    }
}

impl Default for GreetingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingViewEventHandler for GreetingPresenter {
    fn did_tap_show_greeting_button(&self) -> Result<()> {
        tracing::debug!("presenter: show-greeting event, asking interactor");
        // 只跟 interactor 互動，不直接碰 entity
        self.greeting_provider.get()?.provide_greeting_data()
    }
}

impl GreetingOutput for GreetingPresenter {
    fn receive_greeting_data(&self, greeting_data: GreetingData) -> Result<()> {
        let greeting = format_greeting(&greeting_data);
        tracing::debug!("presenter: pushing '{}' to view", greeting);
        self.view.get()?.set_greeting(&greeting);
        Ok(())
    }

    fn receive_greeting_error(&self, error: DataError) -> Result<()> {
        let message = format_error(&error);
        tracing::debug!("presenter: pushing error message '{}' to view", message);
        self.view.get()?.set_greeting(&message);
        Ok(())
    }
}
