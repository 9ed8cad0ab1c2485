//! tinystack command-line support.
//!
//! The binary lives in `main.rs`; this library holds the parts that are
//! worth testing without spawning a process.

pub mod repl;
