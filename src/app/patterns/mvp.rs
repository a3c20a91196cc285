use crate::core::interactor::compose_subject;
use crate::core::link::Link;
use crate::core::view::LabelView;
use crate::core::{
    GreetingScene, GreetingView, GreetingViewEventHandler, Pattern, Person, RenderSurface, Result,
};
use std::rc::{Rc, Weak};

/// MVP presenter: owns the model and talks to the view only through [`GreetingView`].
pub struct MvpPresenter {
    view: Link<dyn GreetingView>,
    person: Person,
    greeting_word: String,
}

impl MvpPresenter {
    pub fn new(person: Person, greeting_word: impl Into<String>) -> Self {
        Self {
            view: Link::new("mvp.presenter.view"),
            person,
            greeting_word: greeting_word.into(),
        }
    }

    pub fn attach_view(&self, view: Weak<dyn GreetingView>) {
        self.view.connect(view);
    }

    pub fn show_greeting(&self) -> Result<()> {
        let greeting = format!("{} {}", self.greeting_word, compose_subject(&self.person));
        tracing::debug!("mvp presenter: pushing '{}' to view", greeting);
        self.view.get()?.set_greeting(&greeting);
        Ok(())
    }
}

impl GreetingViewEventHandler for MvpPresenter {
    fn did_tap_show_greeting_button(&self) -> Result<()> {
        self.show_greeting()
    }
}

/// The same [`LabelView`] as the VIPER module, wired to an [`MvpPresenter`] instead.
pub struct MvpScene {
    view: Rc<LabelView>,
    presenter: Rc<MvpPresenter>,
}

impl MvpScene {
    pub fn assemble(view: LabelView, presenter: MvpPresenter) -> Self {
        let view = Rc::new(view);
        let presenter = Rc::new(presenter);

        let handler = Rc::downgrade(&presenter) as Weak<dyn GreetingViewEventHandler>;
        let display = Rc::downgrade(&view) as Weak<dyn GreetingView>;
        view.attach_event_handler(handler);
        presenter.attach_view(display);

        Self { view, presenter }
    }

    pub fn build(
        person: Person,
        greeting_word: &str,
        placeholder: &str,
        surface: Rc<dyn RenderSurface>,
    ) -> Self {
        Self::assemble(
            LabelView::new(placeholder, surface),
            MvpPresenter::new(person, greeting_word),
        )
    }

    pub fn presenter(&self) -> &MvpPresenter {
        &self.presenter
    }
}

impl GreetingScene for MvpScene {
    fn pattern(&self) -> Pattern {
        Pattern::Mvp
    }

    fn load(&self) {
        self.view.load();
    }

    fn tap(&self) -> Result<()> {
        self.view.tap()
    }

    fn greeting(&self) -> String {
        self.view.greeting()
    }
}
