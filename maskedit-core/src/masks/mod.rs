// maskedit-core/src/masks/mod.rs
//! Mask compilation for maskedit.
//!
//! This module turns mask strings into immutable slot tables that the
//! transducer and caret planner address position by position.

pub mod compiler;
