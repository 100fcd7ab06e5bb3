//! Concrete control variants.
//!
//! Each variant is generic over its binding [mode](crate::mode): the
//! detached form implements [`Control`](crate::control::Control), the bound
//! form is built with `bound(...)` and kept in sync with its source.

mod boolean;
mod button;
mod num;
mod picker;
mod range;
mod select;
mod text;

pub use boolean::Bool;
pub use button::Button;
pub use num::{Num, NumParams};
pub use picker::{Color, ColorAlpha};
pub use range::{Range, RangeParams};
pub use select::Select;
pub use text::Str;

/// Implements [`Widget`](crate::widget::Widget) and
/// [`Labeled`](crate::widget::Labeled) for a control holding a `frame`.
macro_rules! impl_control_widget {
    ($ty:ident, $kind:ident) => {
        impl<M> $crate::widget::Widget for $ty<M> {
            fn root(&self) -> ::knobs_dom::ElementId {
                self.frame.root
            }

            fn kind(&self) -> $crate::widget::WidgetKind {
                $crate::widget::WidgetKind::$kind
            }
        }

        impl<M> $crate::widget::Labeled for $ty<M> {
            fn label(&self) -> &str {
                &self.frame.label
            }
        }
    };
}

pub(crate) use impl_control_widget;
