//! Binding modes of a control, fixed at construction.
//!
//! Controls are generic over their mode. A `Num<Detached>` owns its value and
//! exposes [`Control`](crate::control::Control); a `Num<Bound<f64>>` is a live
//! view onto a [`Bindable`] source and only offers `refresh`.

use crate::binding::Bindable;
use std::fmt;
use std::rc::Rc;

/// The control owns its value; callers use get/set/listen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

/// The control mirrors an external source of type `T`.
pub struct Bound<T> {
    source: Rc<dyn Bindable<T>>,
}

impl<T: 'static> Bound<T> {
    pub(crate) fn new(source: impl Bindable<T> + 'static) -> Self {
        Self {
            source: Rc::new(source),
        }
    }

    pub fn source(&self) -> &dyn Bindable<T> {
        &*self.source
    }

    /// Shared handle for event handlers installed by the control.
    pub(crate) fn shared(&self) -> Rc<dyn Bindable<T>> {
        Rc::clone(&self.source)
    }
}

impl<T> Clone for Bound<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<T> fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
