//! Knobs - live-tuning control panels
//!
//! Knobs builds small inspector-style panels out of folders and controls:
//!
//! - **Containers**: a root `Gui` and nested `Folder`s with an ordered,
//!   mutable child list
//! - **Controls**: `Num`, `Range`, `Str`, `Select`, `Bool`, `Color`,
//!   `ColorAlpha`, plus `Button`
//! - **Two binding styles**: detached controls with get/set/listen, or bound
//!   controls that keep a host property and the display in sync
//! - **Surfaces**: widgets render through the `Surface` trait; `Document` is
//!   an in-memory implementation
//!
//! # Quick Start
//!
//! ```rust
//! use knobs::prelude::*;
//!
//! let mut doc = Document::new();
//! let mut gui = Gui::new(&mut doc, "Tuning").unwrap();
//! let state = HostObject::new().with("speed", 5.0).with("debug", false);
//!
//! let speed = Range::bound(&mut doc, "speed", state.property("speed"), RangeParams::new(0.0, 10.0)).unwrap();
//! let debug = Bool::bound(&mut doc, "debug", state.property("debug")).unwrap();
//! gui.add(&mut doc, &speed).unwrap();
//! gui.add(&mut doc, &debug).unwrap();
//!
//! doc.user_input(speed.slider(), "7").unwrap();
//! doc.user_toggle(debug.input()).unwrap();
//! assert_eq!(state.number("speed"), Some(7.0));
//! assert_eq!(state.boolean("debug"), Some(true));
//! ```

pub use knobs_core as core;
pub use knobs_dom as dom;
pub use knobs_ui as ui;

pub use knobs_core::Config;
pub use knobs_core::logging;
pub use knobs_dom::{Document, DomError, Surface};
pub use knobs_ui::{GuiError, GuiResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use knobs_core::Config;

    pub use knobs_dom::{Document, ElementId, EventKind, Surface};

    pub use knobs_ui::{
        Bindable, Bool, Bound, Button, Color, ColorAlpha, Control, Detached, Folder, Gui,
        GuiError, GuiResult, HostObject, Labeled, Lens, Num, NumParams, Property, Range,
        RangeParams, Select, Str, Value, Widget, WidgetKind,
    };
}

/// Install logging from the environment (`KNOBS_LOG`) and log the version.
pub fn init_logging() {
    knobs_core::logging::init();
    tracing::info!("knobs {} initialized", env!("CARGO_PKG_VERSION"));
}
