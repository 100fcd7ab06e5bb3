//! Two-way binding sources.
//!
//! A bound control is a live view onto a value that lives somewhere else.
//! The control never aliases that storage; it talks to it through
//! [`Bindable`], reading once when it renders and committing on every edit.
//!
//! Three sources ship with the crate:
//! - [`Property`]: a key on a [`HostObject`], a shared property bag that
//!   notifies observers on every write.
//! - [`Lens`]: one typed field of an `Rc<RefCell<S>>`.
//! - `Rc<RefCell<T>>`: the whole cell.

use crate::error::{GuiError, GuiResult};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A value source a control can be bound to.
pub trait Bindable<T> {
    /// Current value of the source.
    fn read(&self) -> GuiResult<T>;

    /// Write a new value into the source.
    fn commit(&self, value: T);
}

/// Dynamically typed value stored on a [`HostObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Packed color, `0xRRGGBB` or `0xRRGGBBAA`.
    Color(u32),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Color(value)
    }
}

/// Rust types that can be read from and written to a [`Value`].
pub trait PropertyValue: Sized + Into<Value> {
    /// Name used in type mismatch errors.
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl PropertyValue for f64 {
    const TYPE_NAME: &'static str = "number";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PropertyValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl PropertyValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl PropertyValue for u32 {
    const TYPE_NAME: &'static str = "color";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Color(c) => Some(*c),
            // Plain integral numbers are accepted as packed colors.
            Value::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => {
                Some(*n as u32)
            }
            _ => None,
        }
    }
}

/// Handle to an observer registered on a [`HostObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<RefCell<dyn FnMut(&Value)>>;

#[derive(Default)]
struct ObjectState {
    fields: IndexMap<String, Value>,
    observers: Vec<(ObserverId, String, Observer)>,
    next_observer: u64,
}

/// Shared, observable property bag that bound controls write into.
///
/// Clones share the same storage. Observers of a key run synchronously
/// after each [`HostObject::set`] of that key, in registration order.
#[derive(Clone, Default)]
pub struct HostObject {
    state: Rc<RefCell<ObjectState>>,
}

impl HostObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initialisation. Does not notify observers.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.state
            .borrow_mut()
            .fields
            .insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.state.borrow().fields.get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.state.borrow().fields.contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.state.borrow().fields.keys().cloned().collect()
    }

    /// Write `key` and notify its observers.
    pub fn set(&self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        let observers: Vec<Observer> = {
            let mut state = self.state.borrow_mut();
            state.fields.insert(key.to_string(), value.clone());
            state
                .observers
                .iter()
                .filter(|(_, observed, _)| observed == key)
                .map(|(_, _, observer)| Rc::clone(observer))
                .collect()
        };

        for observer in observers {
            match observer.try_borrow_mut() {
                Ok(mut callback) => (&mut *callback)(&value),
                Err(_) => tracing::warn!("Skipping re-entrant observer of '{}'", key),
            }
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).as_ref().and_then(f64::from_value)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).as_ref().and_then(String::from_value)
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).as_ref().and_then(bool::from_value)
    }

    pub fn color(&self, key: &str) -> Option<u32> {
        self.get(key).as_ref().and_then(u32::from_value)
    }

    /// Run `callback` after every write to `key`.
    pub fn observe<F>(&self, key: impl Into<String>, callback: F) -> ObserverId
    where
        F: FnMut(&Value) + 'static,
    {
        let observer: Observer = Rc::new(RefCell::new(callback));
        let mut state = self.state.borrow_mut();
        let id = ObserverId(state.next_observer);
        state.next_observer += 1;
        state.observers.push((id, key.into(), observer));
        id
    }

    /// Returns whether the observer was registered.
    pub fn unobserve(&self, id: ObserverId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.observers.len();
        state.observers.retain(|(observer, _, _)| *observer != id);
        state.observers.len() != before
    }

    /// The `(object, key)` pair a control binds to.
    pub fn property(&self, key: impl Into<String>) -> Property {
        Property {
            object: self.clone(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("HostObject")
            .field("fields", &state.fields)
            .field("observers", &state.observers.len())
            .finish()
    }
}

/// A key on a [`HostObject`].
#[derive(Debug, Clone)]
pub struct Property {
    object: HostObject,
    key: String,
}

impl Property {
    pub fn object(&self) -> &HostObject {
        &self.object
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: PropertyValue> Bindable<T> for Property {
    fn read(&self) -> GuiResult<T> {
        let value = self
            .object
            .get(&self.key)
            .ok_or_else(|| GuiError::MissingProperty {
                key: self.key.clone(),
            })?;
        T::from_value(&value).ok_or_else(|| GuiError::PropertyType {
            key: self.key.clone(),
            expected: T::TYPE_NAME,
        })
    }

    fn commit(&self, value: T) {
        self.object.set(&self.key, value);
    }
}

/// One typed field of a shared struct.
///
/// ```rust
/// use knobs_ui::{Bindable, Lens};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Settings { speed: f64 }
///
/// let settings = Rc::new(RefCell::new(Settings { speed: 2.0 }));
/// let speed = Lens::new(settings.clone(), |s| s.speed, |s, v| s.speed = v);
/// speed.commit(4.0);
/// assert_eq!(settings.borrow().speed, 4.0);
/// ```
pub struct Lens<S, T> {
    target: Rc<RefCell<S>>,
    get: fn(&S) -> T,
    set: fn(&mut S, T),
}

impl<S, T> Lens<S, T> {
    pub fn new(target: Rc<RefCell<S>>, get: fn(&S) -> T, set: fn(&mut S, T)) -> Self {
        Self { target, get, set }
    }
}

impl<S, T> Clone for Lens<S, T> {
    fn clone(&self) -> Self {
        Self {
            target: Rc::clone(&self.target),
            get: self.get,
            set: self.set,
        }
    }
}

impl<S, T> Bindable<T> for Lens<S, T> {
    fn read(&self) -> GuiResult<T> {
        Ok((self.get)(&self.target.borrow()))
    }

    fn commit(&self, value: T) {
        (self.set)(&mut self.target.borrow_mut(), value);
    }
}

impl<T: Clone> Bindable<T> for Rc<RefCell<T>> {
    fn read(&self) -> GuiResult<T> {
        Ok(self.borrow().clone())
    }

    fn commit(&self, value: T) {
        *self.borrow_mut() = value;
    }
}
