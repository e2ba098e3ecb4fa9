//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders, used by
//!   the notice and the file prompt

mod dialog_frame;

pub(crate) use dialog_frame::dialog_area;
pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
