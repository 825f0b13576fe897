//! Integration tests
//!
//! These tests drive the real HTTP client against a mock API server.

pub mod removal_tests;
