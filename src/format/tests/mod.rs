//! Unit tests for project persistence and HTML export.
//!
//! These tests verify HTML generation, lenient project parsing and
//! project round trips.

mod project_tests;
mod roundtrip_tests;
