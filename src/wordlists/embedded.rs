//! Embedded word lists and puzzle records
//!
//! Data compiled into the binary at build time.

// Include generated constants from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
