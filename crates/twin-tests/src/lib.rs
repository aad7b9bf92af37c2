//! End-to-end tests for the car twin service
//!
//! This crate contains tests that exercise the full stack in-process:
//! - HTTP API layer (routing, CORS, error shapes)
//! - State store and metrics aggregation behind it
//! - The typed client
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p twin-tests
//! ```
//!
//! # Test Structure
//!
//! - `e2e_test.rs` - Full stack scenarios driven through twin-client
//! - `api_integration_test.rs` - Raw HTTP details: CORS headers, error
//!   bodies, malformed payloads

// This crate only contains tests, no library code
