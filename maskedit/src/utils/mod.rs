// maskedit/src/utils/mod.rs
pub mod clipboard;
pub mod input;
