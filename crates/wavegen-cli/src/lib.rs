//! wavegen CLI library.
//!
//! This crate provides the core functionality for the wavegen CLI: parameter
//! loading with command-line overrides, and the `generate`, `validate` and
//! `template` commands.

pub mod commands;
pub mod input;
