//! Flag geometry and rendering
//!
//! - `wave`: closed outline of the rippling cloth for a given phase
//! - `emblem`: rim + 24 spokes
//! - `composition`: bands and emblem clipped to the outline (plain data)
//! - `render`: macroquad drawing of a composed flag
//!
//! Some geometry queries (bounds, closure checks) are only exercised by tests.

#![allow(dead_code)]

mod composition;
mod emblem;
mod render;
mod wave;

pub use composition::*;
pub use emblem::*;
pub use render::*;
pub use wave::*;

/// Logical size of the flag cloth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagSize {
    pub width: f32,
    pub height: f32,
}

impl FlagSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
