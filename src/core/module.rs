use crate::core::interactor::GreetingInteractor;
use crate::core::presenter::GreetingPresenter;
use crate::core::view::LabelView;
use crate::domain::model::Pattern;
use crate::domain::ports::{
    GreetingOutput, GreetingProvider, GreetingScene, GreetingView, GreetingViewEventHandler,
    PersonSource, RenderSurface, SettingsProvider,
};
use crate::utils::error::Result;
use std::rc::{Rc, Weak};

/// Composition root of the VIPER module (no router).
///
/// Owns view, presenter and interactor. Every cross reference between them is
/// a `Weak` link established in [`GreetingModule::assemble`].
pub struct GreetingModule {
    view: Rc<LabelView>,
    presenter: Rc<GreetingPresenter>,
    interactor: Rc<GreetingInteractor>,
}

impl GreetingModule {
    pub fn assemble(view: LabelView, presenter: GreetingPresenter, interactor: GreetingInteractor) -> Self {
        let view = Rc::new(view);
        let presenter = Rc::new(presenter);
        let interactor = Rc::new(interactor);

        let handler = Rc::downgrade(&presenter) as Weak<dyn GreetingViewEventHandler>;
        let display = Rc::downgrade(&view) as Weak<dyn GreetingView>;
        let provider = Rc::downgrade(&interactor) as Weak<dyn GreetingProvider>;
        let output = Rc::downgrade(&presenter) as Weak<dyn GreetingOutput>;

        view.attach_event_handler(handler);
        presenter.attach_view(display);
        presenter.attach_provider(provider);
        interactor.attach_output(output);

        tracing::debug!("VIPER module assembled");
        Self {
            view,
            presenter,
            interactor,
        }
    }

    pub fn build<C: SettingsProvider>(
        settings: &C,
        source: Box<dyn PersonSource>,
        surface: Rc<dyn RenderSurface>,
    ) -> Self {
        Self::assemble(
            LabelView::new(settings.placeholder(), surface),
            GreetingPresenter::new(),
            GreetingInteractor::with_greeting_word(source, settings.greeting_word()),
        )
    }

    pub fn view(&self) -> &LabelView {
        &self.view
    }

    pub fn presenter(&self) -> &GreetingPresenter {
        &self.presenter
    }

    pub fn interactor(&self) -> &GreetingInteractor {
        &self.interactor
    }
}

impl GreetingScene for GreetingModule {
    fn pattern(&self) -> Pattern {
        Pattern::Viper
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
