//! Prompter adapters.
//!
//! The production prompter lives in the CLI crate (it owns the terminal);
//! this module provides the scripted counterpart for tests.

mod scripted;

pub use scripted::ScriptedPrompter;
