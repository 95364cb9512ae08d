//! Palette types and utilities
//!
//! A [`Palette`] is the fixed, ordered set of hardware colors. Its indices are
//! the hardware color identities and never change after construction.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, COLODORE};
