//! View model and HTML sections for product cards.
//!
//! Composition is a pure mapping: a `ProductCard` plus an evaluation
//! instant becomes a `CardView` (the serializable render tree external
//! renderers consume), and a `CardView` becomes an HTML section string.
//! No state, no I/O.

mod html;
mod view;

pub use html::*;
pub use view::*;
