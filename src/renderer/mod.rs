//! Render boundary
//!
//! Turns a snapshot into plain rectangles and status text. Whatever draws them
//! (SVG, a GPU, a terminal) lives outside this crate.

pub mod shapes;

pub use shapes::{Rect, scene, status_lines};
