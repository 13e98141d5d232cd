//! Core business entities.

mod code;
mod style;

pub use code::{CodePatch, QrCode};
pub use style::{EcLevel, QrStyle};
