use crate::utils::error::{GreetingError, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A non-owning reference set once at wiring time.
///
/// The composition root holds the strong `Rc`s; components only ever hold a
/// `Link`, so there are no reference cycles between presenter, view and
/// interactor.
pub struct Link<T: ?Sized> {
    role: &'static str,
    target: RefCell<Option<Weak<T>>>,
}

impl<T: ?Sized> Link<T> {
    pub fn new(role: &'static str) -> Self {
        Self {
            role,
            target: RefCell::new(None),
        }
    }

    pub fn connect(&self, target: Weak<T>) {
        tracing::trace!("wiring {}", self.role);
        *self.target.borrow_mut() = Some(target);
    }

    pub fn is_connected(&self) -> bool {
        self.target
            .borrow()
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Upgrades the link. The borrow is released before the caller uses the target.
    pub fn get(&self) -> Result<Rc<T>> {
        self.target
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(GreetingError::Unwired { role: self.role })
    }
}
