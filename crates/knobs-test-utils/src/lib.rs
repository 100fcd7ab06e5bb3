//! Test utilities for knobs.
//!
//! - [`Recorder`] captures every payload handed to a listener or observer,
//!   so tests can assert on both the values and how many times a callback
//!   fired.
//! - [`init_test_logging`] routes `tracing` output through the test harness.
//!
//! # Example
//!
//! ```rust
//! use knobs_test_utils::Recorder;
//!
//! let recorder = Recorder::new();
//! let mut sink = recorder.sink();
//! sink(1.5);
//! sink(2.0);
//! assert_eq!(recorder.values(), vec![1.5, 2.0]);
//! assert_eq!(recorder.last(), Some(2.0));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// Shared log of callback payloads.
#[derive(Debug)]
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends its argument to this recorder.
    pub fn sink(&self) -> impl FnMut(T) + use<T> {
        let values = Rc::clone(&self.values);
        move |value| values.borrow_mut().push(value)
    }

    /// Record a value directly.
    pub fn push(&self, value: T) {
        self.values.borrow_mut().push(value);
    }

    pub fn values(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}
