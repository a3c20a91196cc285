use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::{Rc, Weak};
use tempfile::NamedTempFile;
use viper_greeting::adapters::{InlinePersonSource, JsonFilePersonSource};
use viper_greeting::core::interactor::GreetingInteractor;
use viper_greeting::core::presenter::GreetingPresenter;
use viper_greeting::core::view::{LabelView, DEFAULT_PLACEHOLDER};
use viper_greeting::core::{
    GreetingData, GreetingOutput, GreetingProvider, GreetingScene, GreetingView,
    GreetingViewEventHandler, RenderSurface,
};
use viper_greeting::{DataError, GreetingModule};

#[derive(Default)]
struct RecordingSurface {
    shown: RefCell<Vec<String>>,
}

impl RenderSurface for RecordingSurface {
    fn display(&self, text: &str) {
        self.shown.borrow_mut().push(text.to_string());
    }
}

struct CountingHandler {
    inner: Rc<GreetingPresenter>,
    calls: Cell<usize>,
}

impl GreetingViewEventHandler for CountingHandler {
    fn did_tap_show_greeting_button(&self) -> viper_greeting::Result<()> {
        self.calls.set(self.calls.get() + 1);
        self.inner.did_tap_show_greeting_button()
    }
}

struct CountingProvider {
    inner: Rc<GreetingInteractor>,
    calls: Cell<usize>,
}

impl GreetingProvider for CountingProvider {
    fn provide_greeting_data(&self) -> viper_greeting::Result<()> {
        self.calls.set(self.calls.get() + 1);
        self.inner.provide_greeting_data()
    }
}

struct CountingOutput {
    inner: Rc<GreetingPresenter>,
    received: RefCell<Vec<GreetingData>>,
}

impl GreetingOutput for CountingOutput {
    fn receive_greeting_data(&self, greeting_data: GreetingData) -> viper_greeting::Result<()> {
        self.received.borrow_mut().push(greeting_data.clone());
        self.inner.receive_greeting_data(greeting_data)
    }

    fn receive_greeting_error(&self, error: DataError) -> viper_greeting::Result<()> {
        self.inner.receive_greeting_error(error)
    }
}

struct CountingView {
    inner: Rc<LabelView>,
    calls: Cell<usize>,
}

impl GreetingView for CountingView {
    fn set_greeting(&self, greeting: &str) {
        self.calls.set(self.calls.get() + 1);
        self.inner.set_greeting(greeting);
    }
}

fn inline_module(first: &str, last: &str) -> (GreetingModule, Rc<RecordingSurface>) {
    let surface = Rc::new(RecordingSurface::default());
    let module = GreetingModule::assemble(
        LabelView::new(DEFAULT_PLACEHOLDER, surface.clone()),
        GreetingPresenter::new(),
        GreetingInteractor::new(Box::new(InlinePersonSource::new(first, last))),
    );
    (module, surface)
}

#[test]
fn test_one_tap_is_one_call_at_every_hop() -> Result<()> {
    let view = Rc::new(LabelView::new(DEFAULT_PLACEHOLDER, Rc::new(RecordingSurface::default())));
    let presenter = Rc::new(GreetingPresenter::new());
    let interactor = Rc::new(GreetingInteractor::new(Box::new(InlinePersonSource::default())));

    let handler = Rc::new(CountingHandler {
        inner: presenter.clone(),
        calls: Cell::new(0),
    });
    let provider = Rc::new(CountingProvider {
        inner: interactor.clone(),
        calls: Cell::new(0),
    });
    let output = Rc::new(CountingOutput {
        inner: presenter.clone(),
        received: RefCell::new(Vec::new()),
    });
    let counting_view = Rc::new(CountingView {
        inner: view.clone(),
        calls: Cell::new(0),
    });

    view.attach_event_handler(Rc::downgrade(&handler) as Weak<dyn GreetingViewEventHandler>);
    presenter.attach_view(Rc::downgrade(&counting_view) as Weak<dyn GreetingView>);
    presenter.attach_provider(Rc::downgrade(&provider) as Weak<dyn GreetingProvider>);
    interactor.attach_output(Rc::downgrade(&output) as Weak<dyn GreetingOutput>);

    view.tap()?;

    assert_eq!(handler.calls.get(), 1);
    assert_eq!(provider.calls.get(), 1);
    assert_eq!(output.received.borrow().len(), 1);
    assert_eq!(counting_view.calls.get(), 1);
    assert_eq!(view.greeting(), "Hello Qian Yang Biao");

    view.tap()?;

    assert_eq!(handler.calls.get(), 2);
    assert_eq!(provider.calls.get(), 2);
    assert_eq!(output.received.borrow().len(), 2);
    assert_eq!(counting_view.calls.get(), 2);
    Ok(())
}

#[test]
fn test_end_to_end_default_names() -> Result<()> {
    let (module, surface) = inline_module("Qian", "Yang Biao");

    module.load();
    module.tap()?;

    assert_eq!(module.greeting(), "Hello Qian Yang Biao");
    assert_eq!(
        surface.shown.borrow().as_slice(),
        &["Say hello to who?".to_string(), "Hello Qian Yang Biao".to_string()]
    );
    Ok(())
}

#[test]
fn test_transport_carries_subject_unchanged() -> Result<()> {
    let presenter = Rc::new(GreetingPresenter::new());
    let interactor = Rc::new(GreetingInteractor::new(Box::new(InlinePersonSource::new(
        "Ada", "King Lovelace",
    ))));
    let output = Rc::new(CountingOutput {
        inner: presenter.clone(),
        received: RefCell::new(Vec::new()),
    });
    let view = Rc::new(LabelView::new(DEFAULT_PLACEHOLDER, Rc::new(RecordingSurface::default())));
    presenter.attach_view(Rc::downgrade(&view) as Weak<dyn GreetingView>);
    interactor.attach_output(Rc::downgrade(&output) as Weak<dyn GreetingOutput>);

    interactor.provide_greeting_data()?;

    assert_eq!(
        output.received.borrow().as_slice(),
        &[GreetingData::new("Hello", "Ada King Lovelace")]
    );
    assert_eq!(view.greeting(), "Hello Ada King Lovelace");
    Ok(())
}

#[test]
fn test_empty_names_keep_the_separating_spaces() -> Result<()> {
    let (module, _surface) = inline_module("", "");

    module.tap()?;

    assert_eq!(module.greeting(), "Hello  ");
    Ok(())
}

#[test]
fn test_placeholder_stays_until_first_tap() {
    let (module, surface) = inline_module("Qian", "Yang Biao");

    assert_eq!(module.greeting(), "Say hello to who?");
    assert!(surface.shown.borrow().is_empty());

    module.load();
    assert_eq!(module.greeting(), "Say hello to who?");
    assert_eq!(surface.shown.borrow().len(), 1);
}

#[test]
fn test_person_file_is_read_on_every_tap() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(br#"{"first_name": "Grace", "last_name": "Hopper"}"#)?;
    file.flush()?;

    let module = GreetingModule::assemble(
        LabelView::new(DEFAULT_PLACEHOLDER, Rc::new(RecordingSurface::default())),
        GreetingPresenter::new(),
        GreetingInteractor::new(Box::new(JsonFilePersonSource::new(file.path()))),
    );

    module.tap()?;
    assert_eq!(module.greeting(), "Hello Grace Hopper");

    std::fs::write(file.path(), r#"{"first_name": "Alan", "last_name": "Turing"}"#)?;
    module.tap()?;
    assert_eq!(module.greeting(), "Hello Alan Turing");
    Ok(())
}

#[test]
fn test_malformed_person_file_shows_message_once() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"not json")?;
    file.flush()?;

    let surface = Rc::new(RecordingSurface::default());
    let module = GreetingModule::assemble(
        LabelView::new(DEFAULT_PLACEHOLDER, surface.clone()),
        GreetingPresenter::new(),
        GreetingInteractor::new(Box::new(JsonFilePersonSource::new(file.path()))),
    );

    module.tap()?;

    assert!(module.greeting().starts_with("Could not read who to greet ("));
    assert_eq!(surface.shown.borrow().len(), 1);
    Ok(())
}

#[test]
fn test_dropped_presenter_makes_tap_fail() {
    let view = LabelView::new(DEFAULT_PLACEHOLDER, Rc::new(RecordingSurface::default()));
    {
        let presenter = Rc::new(GreetingPresenter::new());
        view.attach_event_handler(Rc::downgrade(&presenter) as Weak<dyn GreetingViewEventHandler>);
    }

    let err = view.tap().unwrap_err();
    assert!(err.to_string().contains("view.event_handler"));
}
