//! Immediate-mode drawing helpers shared by the scene
//!
//! - Layout rectangles in logical pixels
//! - Theme colors and palette conversion
//! - Background gradient

#![allow(dead_code)]

mod background;
mod rect;
mod theme;

pub use background::*;
pub use rect::*;
pub use theme::*;
