//! Purple Jurídico: a themed gpui client for a legal social network, with a
//! persisted corporate/social theme switch and a drag-to-snap bottom sheet.

pub mod components;

pub mod feed;

pub mod preferences;

pub mod sheet;

pub mod theme;

pub mod views;

mod utils;
pub use utils::ElementIdExt;

mod init;
pub use init::*;
