use crate::core::link::Link;
use crate::domain::model::{GreetingData, Person};
use crate::domain::ports::{GreetingOutput, GreetingProvider, PersonSource};
use crate::utils::error::Result;
use std::rc::Weak;

pub const DEFAULT_GREETING_WORD: &str = "Hello";

/// Full name as shown to the user: first and last name joined by exactly one space.
pub fn compose_subject(person: &Person) -> String {
    format!("{} {}", person.first_name, person.last_name)
}

/// Fetches the entity, turns it into transport data and reports to its output.
/// Knows nothing about views.
pub struct GreetingInteractor {
    source: Box<dyn PersonSource>,
    greeting_word: String,
    output: Link<dyn GreetingOutput>,
}

impl GreetingInteractor {
    pub fn new(source: Box<dyn PersonSource>) -> Self {
        Self::with_greeting_word(source, DEFAULT_GREETING_WORD)
    }

    pub fn with_greeting_word(source: Box<dyn PersonSource>, greeting_word: impl Into<String>) -> Self {
        Self {
            source,
            greeting_word: greeting_word.into(),
            output: Link::new("interactor.output"),
        }
    }

    pub fn attach_output(&self, output: Weak<dyn GreetingOutput>) {
        self.output.connect(output);
    }

    pub fn greeting_word(&self) -> &str {
        &self.greeting_word
    }
}

impl GreetingProvider for GreetingInteractor {
    fn provide_greeting_data(&self) -> Result<()> {
        let output = self.output.get()?;

        // 取得資料並轉成 entity，再通知 presenter
        match self.source.fetch_person() {
            Ok(person) => {
                let subject = compose_subject(&person);
                tracing::debug!("interactor: built subject '{}'", subject);
                output.receive_greeting_data(GreetingData::new(self.greeting_word.as_str(), subject))
            }
            Err(e) => {
                tracing::warn!("interactor: person source failed: {}", e);
                output.receive_greeting_error(e)
            }
        }
    }
}
