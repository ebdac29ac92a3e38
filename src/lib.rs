//! Retro-futuristic widgets for GPUI and the theme store they share.

pub mod primitives;

pub mod components;

pub mod theme;

mod utils;
pub use utils::ElementIdExt;

mod init;
pub use init::*;
