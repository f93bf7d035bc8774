// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// A single `Fetcher` is built per run and shared by every request so the
// timeout and User-Agent are configured in one place. There are no retries:
// a page either comes back or the caller moves on.
// =============================================================================

mod page;

pub use page::Fetcher;
