//! Platform abstraction layer
//!
//! Translates raw device events into simulation commands.

pub mod input;

pub use input::KeyCommand;
