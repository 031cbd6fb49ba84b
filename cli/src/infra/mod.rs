//! Infrastructure layer - concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! `scutil` field store, the webhook notifier, host probes and the config
//! file.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod scutil;
pub mod system;
pub mod webhook;
