//! Git command option builders
//!
//! Every public function under `porcelain` is a [`CmdOption`] or returns one.
//! Options are applied to a [`Command`] in the order given.
//!
//! [`CmdOption`]: crate::artifacts::command::CmdOption
//! [`Command`]: crate::artifacts::command::Command

pub mod porcelain;
