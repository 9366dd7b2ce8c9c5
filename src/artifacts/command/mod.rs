//! Command-line assembly for git sub-commands
//!
//! A [`Command`] is an ordered list of tokens seeded with the sub-command name.
//! Flags are added by [`CmdOption`]s: anything that can append tokens to a
//! command. Every `Fn(&mut Command)` is an option, so a toggle is a plain
//! `fn(&mut Command)` and a parameterized flag is a function returning a closure.
//!
//! ```
//! use git_cmd::artifacts::command::Command;
//! use git_cmd::commands::porcelain::pull;
//!
//! let cmd = Command::build("pull", &[&pull::force, &pull::quiet, &pull::depth(5)]);
//! assert_eq!(cmd.finalize(), ["pull", "--force", "--quiet", "--depth=5"]);
//! ```
//!
//! Tokens are never deduplicated or checked for conflicts; git gets exactly
//! what was applied, in the order it was applied.

pub(crate) mod macros;

use std::fmt;

/// A unit of behavior that appends zero or more tokens to a [`Command`].
pub trait CmdOption {
    fn apply(&self, cmd: &mut Command);
}

impl<F> CmdOption for F
where
    F: Fn(&mut Command),
{
    fn apply(&self, cmd: &mut Command) {
        self(cmd)
    }
}

/// Token list of one git invocation, always starting with the sub-command.
///
/// There is no empty command:
///
/// ```compile_fail
/// let cmd = git_cmd::artifacts::command::Command::default();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            tokens: vec![subcommand.into()],
        }
    }

    /// Creates a command for `subcommand` and applies `options` in order.
    pub fn build(subcommand: impl Into<String>, options: &[&dyn CmdOption]) -> Self {
        let mut cmd = Self::new(subcommand);
        cmd.apply(options);
        cmd
    }

    pub fn add_option(&mut self, option: impl Into<String>) {
        self.tokens.push(option.into());
    }

    pub fn add_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(options.into_iter().map(Into::into));
    }

    pub fn apply(&mut self, options: &[&dyn CmdOption]) -> &mut Self {
        for option in options {
            option.apply(self);
        }

        self
    }

    pub fn with(mut self, option: impl CmdOption) -> Self {
        option.apply(&mut self);
        self
    }

    pub fn subcommand(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn finalize(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.tokens.join(" "))
    }
}

/// Applies `options` only when `enabled` holds; otherwise appends nothing.
pub fn cond<'a>(enabled: bool, options: &'a [&'a dyn CmdOption]) -> impl Fn(&mut Command) + 'a {
    move |cmd: &mut Command| {
        if enabled {
            cmd.apply(options);
        }
    }
}
