//! Collaborators outside the option builder
//!
//! - `git`: runs an assembled command with the system git binary

pub mod git;
