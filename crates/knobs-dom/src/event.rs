//! Events and listener registration.

use crate::element::ElementId;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;

/// Event types raised by native elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The element's value changed while the user is editing.
    Input,
    /// The user committed a value.
    Change,
    /// The element was clicked.
    Click,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::Click => "click",
        }
    }
}

/// An event delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Element the event was dispatched on.
    pub target: ElementId,
}

/// Handle to a registered listener, unique per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Shared event callback. Handlers receive the surface so they can update
/// sibling elements while the event is being delivered.
pub type Listener = Rc<RefCell<dyn FnMut(&mut dyn Surface, &Event)>>;

/// Wrap a closure into a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: FnMut(&mut dyn Surface, &Event) + 'static,
{
    Rc::new(RefCell::new(f))
}
