//! Knobs UI - live-tuning panels built from folders and controls
//!
//! This crate provides the widget tree and its two binding styles:
//! - Folders and a root `Gui` holding widgets in a fixed, mutable order
//! - Numeric, range, text, select, boolean and color controls
//! - Detached controls with get/set/listen, or bound controls that mirror a
//!   [`Bindable`] source
//!
//! Widgets are light handles; all state lives on a [`Surface`](knobs_dom::Surface).
//!
//! ## Quick Start
//!
//! ```rust
//! use knobs_dom::{Document, Surface};
//! use knobs_ui::{Control, Gui, HostObject, Num, NumParams, Range, RangeParams};
//!
//! let mut doc = Document::new();
//! let mut gui = Gui::new(&mut doc, "Tuning").unwrap();
//! let params = HostObject::new().with("speed", 5.0).with("gain", 0.5);
//!
//! let speed = Num::new(&mut doc, "speed", NumParams::new().min(0.0).max(10.0)).unwrap();
//! speed.bind(&mut doc, params.property("speed")).unwrap();
//! let gain = Range::bound(&mut doc, "gain", params.property("gain"), RangeParams::default()).unwrap();
//!
//! gui.add(&mut doc, &speed).unwrap();
//! gui.add_at(&mut doc, &gain, 0).unwrap();
//!
//! doc.user_input(gain.slider(), "0.75").unwrap();
//! assert_eq!(params.number("gain"), Some(0.75));
//! assert_eq!(doc.value(gain.number_input()), "0.75");
//! ```

pub mod binding;
pub mod color;
pub mod container;
pub mod control;
pub mod controls;
pub mod error;
pub mod mode;
mod numeric;
pub mod style;
pub mod widget;

pub use binding::{Bindable, HostObject, Lens, ObserverId, Property, PropertyValue, Value};
pub use container::{Folder, Gui};
pub use control::Control;
pub use controls::{
    Bool, Button, Color, ColorAlpha, Num, NumParams, Range, RangeParams, Select, Str,
};
pub use error::{GuiError, GuiResult};
pub use mode::{Bound, Detached};
pub use widget::{Labeled, Widget, WidgetKind, WidgetRef};

static_assertions::assert_impl_all!(WidgetRef: Copy, Send, Sync);
static_assertions::assert_impl_all!(Num<Detached>: Control, Clone);
static_assertions::assert_not_impl_any!(Num<Bound<f64>>: Control);
static_assertions::assert_not_impl_any!(Range<Bound<f64>>: Control);
