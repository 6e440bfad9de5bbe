//! wavembed CLI library.
//!
//! This crate provides the command implementations and logging setup for the
//! `wavembed` binary.

pub mod commands;
pub mod logging;
