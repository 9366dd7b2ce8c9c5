//! Typed option builders for `git pull`, `git fetch` and `git merge`.
//!
//! - `artifacts`: the [`Command`](artifacts::command::Command) token list and the
//!   [`CmdOption`](artifacts::command::CmdOption) capability
//! - `commands`: one option set per sub-command
//! - `areas`: the executor handing finished commands to the git binary

pub mod areas;
pub mod artifacts;
pub mod commands;
