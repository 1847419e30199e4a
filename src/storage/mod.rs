//! File storage helpers
//!
//! Settings and balance files are plain JSON; writes go through a temp file
//! and a rename so a crash never leaves a half-written file behind.

pub mod file_io;

pub use file_io::{read_json, read_json_required, write_json_atomic};
