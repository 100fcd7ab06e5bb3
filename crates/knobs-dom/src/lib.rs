//! Knobs DOM - the visual surface consumed by knobs widgets
//!
//! Widgets never talk to a concrete backend. They construct and mutate
//! elements through the object-safe [`Surface`] trait:
//! - `construct(tag, props, children)` builds an element
//! - tree edits (`insert_before`, `append`, `remove`)
//! - attributes, properties and class list
//! - synchronous event listeners and dispatch
//!
//! [`Document`] is an in-memory implementation that behaves like a browser
//! for the handful of native inputs the panel uses (number, range, color,
//! checkbox, text, select), which makes the whole toolkit testable without
//! a page.
//!
//! ```rust
//! use knobs_dom::{Child, Document, EventKind, Prop, Surface, listener};
//!
//! let mut doc = Document::new();
//! let input = doc
//!     .construct("input", &[("type", Prop::from("range")), ("max", Prop::from(10.0))], Vec::new())
//!     .unwrap();
//! let root = doc.construct("div", &[], vec![Child::text("Speed"), input.into()]).unwrap();
//!
//! doc.add_event_listener(input, EventKind::Input, listener(|surface, event| {
//!     assert_eq!(surface.value(event.target), "10");
//! }))
//! .unwrap();
//! doc.user_input(input, "42").unwrap();
//! assert_eq!(doc.text_content(root), "Speed");
//! ```

pub mod document;
pub mod element;
pub mod error;
pub mod event;
mod native;
pub mod surface;

pub use document::Document;
pub use element::{Child, ElementId, Prop, format_number, parse_number};
pub use error::{DomError, DomResult};
pub use event::{Event, EventKind, Listener, ListenerId, listener};
pub use surface::Surface;

static_assertions::assert_impl_all!(ElementId: Copy, Send, Sync, std::hash::Hash);
static_assertions::assert_not_impl_any!(Document: Send, Sync);
