//! Testing utilities for the wrapstack workspace
//!
//! A small node tree to render composed wrappers into, fixture components,
//! and recorders for asserting on wrapper and callback invocations.

#![allow(missing_docs)]

mod events;
mod fixtures;
mod node;
mod record;

pub use events::{capture_events, CapturedEvent};
pub use fixtures::{section, test_component, title_and_votes_prefixer, title_prefixer};
pub use node::{mount, render_html, Node};
pub use record::CallLog;

/// Trim every line of `s` and join them, so expectations can be indented
pub fn condense(s: &str) -> String {
    s.lines().map(str::trim).collect()
}

/// Install a fmt subscriber that writes through the test harness
///
/// Honours `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
