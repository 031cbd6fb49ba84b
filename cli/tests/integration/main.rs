//! Integration tests for the namesync CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! None of them reach a point where `scutil --set` would run.

mod config_command;
