//! Integration tests for the league setup round-trip
//!
//! These tests run the client against wiremock servers serving a recorded
//! setup page fixture.

mod setup_tests;
