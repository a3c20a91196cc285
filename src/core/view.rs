use crate::core::link::Link;
use crate::domain::ports::{GreetingView, GreetingViewEventHandler, RenderSurface};
use crate::utils::error::Result;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const DEFAULT_PLACEHOLDER: &str = "Say hello to who?";

/// A label plus a "show greeting" button.
///
/// Renders whatever it is told to and forwards taps to its event handler. It
/// has no idea what a person or a greeting record is.
pub struct LabelView {
    label: RefCell<String>,
    event_handler: Link<dyn GreetingViewEventHandler>,
    surface: Rc<dyn RenderSurface>,
}

impl LabelView {
    pub fn new(placeholder: impl Into<String>, surface: Rc<dyn RenderSurface>) -> Self {
        Self {
            label: RefCell::new(placeholder.into()),
            event_handler: Link::new("view.event_handler"),
            surface,
        }
    }

    pub fn attach_event_handler(&self, handler: Weak<dyn GreetingViewEventHandler>) {
        self.event_handler.connect(handler);
    }

    /// Puts the current label (the placeholder, before any tap) on the surface.
    pub fn load(&self) {
        self.surface.display(&self.label.borrow());
    }

    /// The button's tap action: hand the event to whoever handles it.
    pub fn tap(&self) -> Result<()> {
        tracing::debug!("view: show-greeting button tapped");
        self.event_handler.get()?.did_tap_show_greeting_button()
    }

    pub fn greeting(&self) -> String {
        self.label.borrow().clone()
    }
}

impl GreetingView for LabelView {
    fn set_greeting(&self, greeting: &str) {
        *self.label.borrow_mut() = greeting.to_string();
        self.surface.display(greeting);
    }
}
