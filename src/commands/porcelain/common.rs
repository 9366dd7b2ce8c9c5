//! Flags understood by both git-fetch and git-merge

use crate::artifacts::command::macros::toggle;

toggle! {
    /// Force progress reporting on stderr even when it is not a terminal.
    ///
    /// `--progress`
    progress => "--progress"
}

toggle! {
    /// Suppress transfer and merge output.
    ///
    /// `-q, --quiet`
    quiet => "--quiet"
}

toggle! {
    /// `-v, --verbose`
    verbose => "--verbose"
}
