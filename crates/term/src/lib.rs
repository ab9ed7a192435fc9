//! Terminal backend.
//!
//! Renders the scene crate's pixel canvas into a terminal: pixels become
//! half-block cells (two vertical pixels per character cell), canvas text
//! items become plain terminal characters, and a diff-based renderer
//! flushes only what changed.

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
pub use scene_view::{SceneView, Viewport};
pub use tui_platformer_types::Rgb;
