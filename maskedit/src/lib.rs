// maskedit/src/lib.rs
//! # maskedit CLI Application
//!
//! This crate provides the command-line host for the `maskedit-core` engine:
//! formatting and unmasking text through input masks, inspecting compiled
//! masks, listing presets and replaying keystroke scripts against a field.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
