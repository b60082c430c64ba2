//! Tests for Slack API client.

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod debug_tests;
