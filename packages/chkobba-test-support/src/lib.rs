//! Chkobba test support utilities
//!
//! Shared helpers for the integration test binaries: a single, race-safe
//! logging bootstrap so every binary captures `tracing` output the same way.

pub mod logging;
