//! Theme system: presets, the persisted variant selection, and semantic
//! token kinds resolved against whatever theme is currently active.

pub use purple_juridico_theme::*;

mod controller;
pub use controller::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
