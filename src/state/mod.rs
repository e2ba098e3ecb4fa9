//! Application state that lives outside the widgets.

mod text_store;

pub use text_store::{Slot, TextStore};
