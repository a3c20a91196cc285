use crate::core::interactor::compose_subject;
use crate::core::{GreetingScene, Pattern, Person, RenderSurface, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// MVC: view and controller in one object that also holds the model.
pub struct GreetingViewController {
    person: Person,
    greeting_word: String,
    label: RefCell<String>,
    surface: Rc<dyn RenderSurface>,
}

impl GreetingViewController {
    pub fn new(
        person: Person,
        greeting_word: impl Into<String>,
        placeholder: impl Into<String>,
        surface: Rc<dyn RenderSurface>,
    ) -> Self {
        Self {
            person,
            greeting_word: greeting_word.into(),
            label: RefCell::new(placeholder.into()),
            surface,
        }
    }

    pub fn tap_button_action(&self) {
        let greeting = format!("{} {}", self.greeting_word, compose_subject(&self.person));
        tracing::debug!("controller: label set to '{}'", greeting);
        self.surface.display(&greeting);
        *self.label.borrow_mut() = greeting;
    }
}

impl GreetingScene for GreetingViewController {
    fn pattern(&self) -> Pattern {
        Pattern::Mvc
    }

    fn load(&self) {
        self.surface.display(&self.label.borrow());
    }

    fn tap(&self) -> Result<()> {
        self.tap_button_action();
        Ok(())
    }

    fn greeting(&self) -> String {
        self.label.borrow().clone()
    }
}
