//! Options for `git merge`

use crate::artifacts::command::macros::{toggle, valued};
use crate::artifacts::command::{CmdOption, Command};
use std::fmt::Display;

pub use super::common::{progress, quiet, verbose};

pub const SUBCOMMAND: &str = "merge";

/// Builds a `merge` command with `options` applied in order.
pub fn command(options: &[&dyn CmdOption]) -> Command {
    Command::build(SUBCOMMAND, options)
}

toggle! {
    /// Abort the current conflict resolution and try to reconstruct the pre-merge state.
    ///
    /// `--abort`
    abort => "--abort"
}

toggle! {
    /// Allow merging histories that do not share a common ancestor.
    ///
    /// `--allow-unrelated-histories`
    allow_unrelated_histories => "--allow-unrelated-histories"
}

toggle! {
    /// Perform the merge and commit the result, overriding `--no-commit`.
    ///
    /// `--commit`
    commit => "--commit"
}

toggle! {
    /// Conclude a merge once conflicts are resolved. Named `continue_merge`
    /// because `continue` is a keyword.
    ///
    /// `--continue`
    continue_merge => "--continue"
}

toggle! {
    /// Open an editor on the auto-generated merge message before committing.
    ///
    /// `-e, --edit`
    edit => "--edit"
}

toggle! {
    /// Only move the branch pointer when the merge is a fast-forward.
    ///
    /// `--ff`
    ff => "--ff"
}

toggle! {
    /// Refuse to merge unless the merge can be resolved as a fast-forward.
    ///
    /// `--ff-only`
    ff_only => "--ff-only"
}

valued! {
    /// Add one-line descriptions of at most `n` merged commits to the merge
    /// message. An empty `n` leaves the count to git.
    ///
    /// `--log[=<n>]`
    log(n) => "--log"
}

toggle! {
    /// `--no-commit`
    no_commit => "--no-commit"
}

toggle! {
    /// Accept the auto-generated merge message.
    ///
    /// `--no-edit`
    no_edit => "--no-edit"
}

toggle! {
    /// Always create a merge commit, even for a fast-forward.
    ///
    /// `--no-ff`
    no_ff => "--no-ff"
}

toggle! {
    /// `--no-log`
    no_log => "--no-log"
}

toggle! {
    /// `--no-progress`
    no_progress => "--no-progress"
}

toggle! {
    /// `--no-squash`
    no_squash => "--no-squash"
}

toggle! {
    /// Do not show a diffstat at the end of the merge.
    ///
    /// `-n, --no-stat`
    no_stat => "--no-stat"
}

toggle! {
    /// `--no-verify-signatures`
    no_verify_signatures => "--no-verify-signatures"
}

toggle! {
    /// Produce the merged working tree and index without committing or
    /// recording `MERGE_HEAD`.
    ///
    /// `--squash`
    squash => "--squash"
}

toggle! {
    /// Show a diffstat at the end of the merge.
    ///
    /// `--stat`
    stat => "--stat"
}

valued! {
    /// Merge strategy to use. Strategies given more than once are tried in order.
    ///
    /// `-s <strategy>, --strategy=<strategy>`
    strategy(value) => "--strategy"
}

valued! {
    /// Pass a strategy-specific option through to the merge strategy.
    ///
    /// `-X <option>, --strategy-option=<option>`
    strategy_option(option) => "--strategy-option"
}

toggle! {
    /// Refuse to merge unless the tip commit of the merged branch carries a
    /// valid signature.
    ///
    /// `--verify-signatures`
    verify_signatures => "--verify-signatures"
}

/// Message for the merge commit, appended as `-m <msg>`.
pub fn message(msg: impl Display) -> impl Fn(&mut Command) {
    let msg = msg.to_string();
    move |cmd: &mut Command| {
        cmd.add_options(["-m", msg.as_str()]);
    }
}

/// Commits to merge into the current branch, in the given order.
pub fn commits<I, S>(commits: I) -> impl Fn(&mut Command)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let commits: Vec<String> = commits.into_iter().map(Into::into).collect();
    move |cmd: &mut Command| {
        cmd.add_options(commits.iter().map(String::as_str));
    }
}
