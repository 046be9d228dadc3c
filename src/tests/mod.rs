//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests: each file scripts the shell around a
//! title bar (requests, frames, pointer events) and checks the geometry and
//! notifications that come out.

mod acceptance_pulse;
