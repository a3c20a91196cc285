use crate::core::interactor::compose_subject;
use crate::core::{GreetingScene, Pattern, Person, RenderSurface, Result};
use std::cell::RefCell;
use std::rc::Rc;

type GreetingDidChange = Box<dyn Fn(&GreetingViewModel)>;

/// MVVM view model: exposes an observable `greeting` and knows nothing about views.
pub struct GreetingViewModel {
    person: Person,
    greeting_word: String,
    greeting: RefCell<String>,
    greeting_did_change: RefCell<Option<GreetingDidChange>>,
}

impl GreetingViewModel {
    pub fn new(person: Person, greeting_word: impl Into<String>) -> Self {
        Self {
            person,
            greeting_word: greeting_word.into(),
            greeting: RefCell::new(String::new()),
            greeting_did_change: RefCell::new(None),
        }
    }

    /// Registers the single change observer, replacing any previous one.
    pub fn bind(&self, on_change: impl Fn(&GreetingViewModel) + 'static) {
        *self.greeting_did_change.borrow_mut() = Some(Box::new(on_change));
    }

    pub fn greeting(&self) -> String {
        self.greeting.borrow().clone()
    }

    pub fn show_greeting(&self) {
        let greeting = format!("{} {}", self.greeting_word, compose_subject(&self.person));
        tracing::debug!("view model: greeting changed to '{}'", greeting);
        *self.greeting.borrow_mut() = greeting;

        if let Some(on_change) = self.greeting_did_change.borrow().as_ref() {
            on_change(self);
        }
    }
}

/// View bound to a [`GreetingViewModel`]: taps go to the view model, changes come back
/// through the binding.
pub struct BoundLabelView {
    view_model: Rc<GreetingViewModel>,
    label: Rc<RefCell<String>>,
    surface: Rc<dyn RenderSurface>,
}

impl BoundLabelView {
    pub fn new(
        view_model: Rc<GreetingViewModel>,
        placeholder: impl Into<String>,
        surface: Rc<dyn RenderSurface>,
    ) -> Self {
        let label = Rc::new(RefCell::new(placeholder.into()));

        let bound_label = Rc::downgrade(&label);
        let bound_surface = Rc::clone(&surface);
        view_model.bind(move |view_model| {
            if let Some(label) = bound_label.upgrade() {
                let greeting = view_model.greeting();
                bound_surface.display(&greeting);
                *label.borrow_mut() = greeting;
            }
        });

        Self {
            view_model,
            label,
            surface,
        }
    }

    pub fn build(
        person: Person,
        greeting_word: &str,
        placeholder: &str,
        surface: Rc<dyn RenderSurface>,
    ) -> Self {
        Self::new(
            Rc::new(GreetingViewModel::new(person, greeting_word)),
            placeholder,
            surface,
        )
    }

    pub fn view_model(&self) -> &GreetingViewModel {
        &self.view_model
    }
}

impl GreetingScene for BoundLabelView {
    fn pattern(&self) -> Pattern {
        Pattern::Mvvm
    }

    fn load(&self) {
        self.surface.display(&self.label.borrow());
    }

    fn tap(&self) -> Result<()> {
        self.view_model.show_greeting();
        Ok(())
    }

    fn greeting(&self) -> String {
        self.label.borrow().clone()
    }
}
