//! TUI platformer scene (workspace facade crate).
//!
//! Re-exports the member crates under the `tui_platformer::{scene,term,types}`
//! paths used by the binary, integration tests, and benchmarks.

pub use tui_platformer_scene as scene;
pub use tui_platformer_term as term;
pub use tui_platformer_types as types;
