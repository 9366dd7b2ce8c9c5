//! Porcelain option sets
//!
//! One module per git sub-command the crate can assemble:
//!
//! - `fetch`: download objects and refs from another repository
//! - `merge`: join development histories together
//! - `pull`: fetch, then merge or rebase; re-exports the fetch and merge
//!   flags it forwards
//!
//! Flags accepted by both fetch and merge live in `common`.

mod common;
pub mod fetch;
pub mod merge;
pub mod pull;
