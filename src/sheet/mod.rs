//! Drag-to-snap behaviour for bottom sheets, independent of rendering.

mod snap;
pub use snap::*;

mod state;
pub use state::*;
