//! Core types
//!
//! - `command`: the token list being assembled and the option capability that
//!   appends to it

pub mod command;
