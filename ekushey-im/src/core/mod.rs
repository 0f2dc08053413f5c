//! Core input-method types: key events and the keyboard engine.

pub mod engine;
pub mod keycode;
