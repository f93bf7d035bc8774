// src/output/mod.rs
// =============================================================================
// This module turns the collected link set into the output file.
// =============================================================================

mod writer;

pub use writer::write_links;
