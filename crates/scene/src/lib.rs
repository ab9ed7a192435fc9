//! Scene core: deterministic and free of I/O.
//!
//! This crate holds everything needed to produce one frame of the platformer
//! illustration: responsive sizing, the software drawing surface, the
//! reference-space layout constants, and the layered scene painter. It can
//! be unit-tested without a terminal.

pub mod canvas;
pub mod layout;
pub mod render;
pub mod viewport;

pub use canvas::{Canvas, TextItem};
pub use render::render_scene;
pub use viewport::{compute_dimensions, Dimensions};
