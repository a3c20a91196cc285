use crate::domain::model::{GreetingData, Pattern, Person};
use crate::utils::error::{DataError, Result};

/// Inbound capability of the interactor.
pub trait GreetingProvider {
    fn provide_greeting_data(&self) -> Result<()>;
}

/// Callback capability the interactor reports to.
pub trait GreetingOutput {
    fn receive_greeting_data(&self, greeting_data: GreetingData) -> Result<()>;

    fn receive_greeting_error(&self, error: DataError) -> Result<()>;
}

/// What the view forwards its raw UI events to.
pub trait GreetingViewEventHandler {
    fn did_tap_show_greeting_button(&self) -> Result<()>;
}

/// Display capability of a view. The presenter only ever sees this.
pub trait GreetingView {
    fn set_greeting(&self, greeting: &str);
}

/// Data-access collaborator behind the interactor.
pub trait PersonSource {
    fn fetch_person(&self) -> std::result::Result<Person, DataError>;
}

/// Where a view puts text for the user to see.
pub trait RenderSurface {
    fn display(&self, text: &str);
}

/// One pattern's objects, assembled and ready to receive taps.
pub trait GreetingScene {
    fn pattern(&self) -> Pattern;

    /// Shows the initial placeholder. Fires no events.
    fn load(&self);

    fn tap(&self) -> Result<()>;

    fn greeting(&self) -> String;
}

/// Settings every scene builder reads.
pub trait SettingsProvider {
    fn pattern(&self) -> Pattern;
    fn greeting_word(&self) -> &str;
    fn placeholder(&self) -> &str;
    fn taps(&self) -> usize;
}
