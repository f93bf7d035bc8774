// src/extract/mod.rs
// =============================================================================
// This module pulls URLs out of fetched pages.
//
// Submodules:
// - subscription: finds subscription links (.yaml/.yml/.txt) in raw text
// - internal: finds same-site article links worth visiting one level deep
//
// The two use different techniques on purpose. Subscription links show up
// in <pre> blocks, inline scripts and plain text, so they are matched with a
// pattern over the whole body. Internal links only matter when they are real
// anchors, so those come from an HTML parser.
// =============================================================================

mod internal;
mod subscription;

pub use internal::discover_internal_links;
pub use subscription::extract_subscription_links;
