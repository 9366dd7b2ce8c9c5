//! Options for `git fetch`
//!
//! Toggles are plain functions and can be passed as-is; parameterized flags
//! return the option to apply:
//!
//! ```
//! use git_cmd::commands::porcelain::fetch;
//!
//! let cmd = fetch::command(&[&fetch::prune, &fetch::depth(1), &fetch::repository("origin")]);
//! assert_eq!(cmd.tokens(), ["fetch", "--prune", "--depth=1", "origin"]);
//! ```

use crate::artifacts::command::macros::{toggle, valued};
use crate::artifacts::command::{CmdOption, Command};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

pub use super::common::{progress, quiet, verbose};

pub const SUBCOMMAND: &str = "fetch";

/// Builds a `fetch` command with `options` applied in order.
pub fn command(options: &[&dyn CmdOption]) -> Command {
    Command::build(SUBCOMMAND, options)
}

toggle! {
    /// Fetch all remotes.
    ///
    /// `--all`
    all => "--all"
}

toggle! {
    /// Append fetched ref names to `.git/FETCH_HEAD` instead of overwriting it.
    ///
    /// `-a, --append`
    append => "--append"
}

valued! {
    /// Deepen a shallow clone by `depth` commits from the current shallow boundary.
    ///
    /// `--deepen=<depth>`
    deepen(depth) => "--deepen"
}

valued! {
    /// Limit fetching to `depth` commits from the tip of each remote branch.
    ///
    /// `--depth=<depth>`
    depth(value) => "--depth"
}

toggle! {
    /// Show what would be done, without making any changes.
    ///
    /// `--dry-run`
    dry_run => "--dry-run"
}

toggle! {
    /// Update local branches from a `<rbranch>:<lbranch>` refspec even when the
    /// update is not a fast-forward.
    ///
    /// `-f, --force`
    force => "--force"
}

toggle! {
    /// `-4, --ipv4`
    ipv4 => "--ipv4"
}

toggle! {
    /// `-6, --ipv6`
    ipv6 => "--ipv6"
}

valued! {
    /// Number of parallel children used for fetching submodules and remotes.
    ///
    /// `-j, --jobs=<n>`
    jobs(n) => "--jobs"
}

toggle! {
    /// Keep the downloaded pack.
    ///
    /// `-k, --keep`
    keep => "--keep"
}

toggle! {
    /// Treat every positional argument as a remote or remote group.
    ///
    /// `--multiple`
    multiple => "--multiple"
}

valued! {
    /// `--no-recurse-submodules[=yes|on-demand|no]`
    no_recurse_submodules(value) => "--no-recurse-submodules"
}

toggle! {
    /// Disable automatic tag following.
    ///
    /// `-n, --no-tags`
    no_tags => "--no-tags"
}

toggle! {
    /// Remove remote-tracking refs that no longer exist on the remote.
    ///
    /// `-p, --prune`
    prune => "--prune"
}

toggle! {
    /// Remove local tags that no longer exist on the remote.
    ///
    /// `-P, --prune-tags`
    prune_tags => "--prune-tags"
}

valued! {
    /// Control whether new commits of populated submodules are fetched too.
    ///
    /// `--recurse-submodules[=yes|on-demand|no]`
    recurse_submodules(value) => "--recurse-submodules"
}

valued! {
    /// Exclude commits reachable from `revision` from a shallow history.
    /// May be given more than once.
    ///
    /// `--shallow-exclude=<revision>`
    shallow_exclude(revision) => "--shallow-exclude"
}

valued! {
    /// Deepen or shorten a shallow history to commits after `date`.
    ///
    /// `--shallow-since=<date>`
    shallow_since(date) => "--shallow-since"
}

/// [`shallow_since`] taking a timestamp, rendered as RFC 3339 in UTC.
pub fn shallow_since_at(date: DateTime<Utc>) -> impl Fn(&mut Command) {
    shallow_since(date.to_rfc3339_opts(SecondsFormat::Secs, true))
}

toggle! {
    /// Fetch all tags from the remote in addition to whatever else is fetched.
    ///
    /// `-t, --tags`
    tags => "--tags"
}

toggle! {
    /// Convert a shallow repository to a complete one.
    ///
    /// `--unshallow`
    unshallow => "--unshallow"
}

toggle! {
    /// Allow updating the ref of the currently checked out branch.
    ///
    /// `-u, --update-head-ok`
    update_head_ok => "--update-head-ok"
}

toggle! {
    /// Accept refs that require updating `.git/shallow`.
    ///
    /// `--update-shallow`
    update_shallow => "--update-shallow"
}

/// Path of the `git-upload-pack` program on the remote end.
///
/// Appended as two tokens: `--upload-pack <upload-pack>`.
pub fn upload_pack(value: impl Display) -> impl Fn(&mut Command) {
    let value = value.to_string();
    move |cmd: &mut Command| {
        cmd.add_options(["--upload-pack", value.as_str()]);
    }
}

/// The remote to fetch from: a URL or a configured remote name.
pub fn repository(remote: impl Display) -> impl Fn(&mut Command) {
    let remote = remote.to_string();
    move |cmd: &mut Command| {
        cmd.add_option(remote.as_str());
    }
}

/// Refs to fetch, each appended as its own token in the given order.
pub fn refspec<I, S>(refs: I) -> impl Fn(&mut Command)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let refs: Vec<String> = refs.into_iter().map(Into::into).collect();
    move |cmd: &mut Command| {
        cmd.add_options(refs.iter().map(String::as_str));
    }
}
