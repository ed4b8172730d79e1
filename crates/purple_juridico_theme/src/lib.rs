//! Theme data model for Purple Jurídico.
//!
//! A [`Theme`] bundles layout tokens with a light and a dark appearance.
//! Two presets ship with the crate and are selected by [`ThemeVariantId`].

mod schema;
pub use schema::*;

mod deserializers;

mod variant;
pub use variant::*;
