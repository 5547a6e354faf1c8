//! End-to-end test suite for Soulkeeper.
//!
//! Integration tests drive the tracker through whole play sessions: load,
//! plan, apply, record souls, save and reload.

pub mod helpers;
