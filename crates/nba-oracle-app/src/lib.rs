// Library root: re-exports the I/O layer so integration tests can drive a
// full run without spawning the binary.

pub mod config;
pub mod ingest;
pub mod output;
pub mod run;
