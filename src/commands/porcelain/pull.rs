//! Options for `git pull`
//!
//! git-pull runs git-fetch and then git-merge (or git-rebase), forwarding the
//! relevant flags to each. The fetch- and merge-side options are re-exported
//! from [`fetch`](super::fetch) and [`merge`](super::merge); this module adds
//! the flags only pull understands.

use crate::artifacts::command::macros::{toggle, valued};
use crate::artifacts::command::{CmdOption, Command};

pub use super::common::{progress, quiet, verbose};
pub use super::fetch::{
    all, append, deepen, depth, force, ipv4, ipv6, keep, no_recurse_submodules, no_tags,
    recurse_submodules, refspec, repository, shallow_exclude, shallow_since, shallow_since_at,
    unshallow, update_head_ok, update_shallow, upload_pack,
};
pub use super::merge::{
    allow_unrelated_histories, commit, edit, ff, ff_only, log, no_commit, no_edit, no_ff,
    no_log, no_squash, no_stat, no_verify_signatures, squash, stat, strategy, strategy_option,
    verify_signatures,
};

pub const SUBCOMMAND: &str = "pull";

/// Builds a `pull` command with `options` applied in order.
pub fn command(options: &[&dyn CmdOption]) -> Command {
    Command::build(SUBCOMMAND, options)
}

toggle! {
    /// Stash local modifications before a rebase and apply them again afterwards.
    ///
    /// `--autostash`
    autostash => "--autostash"
}

toggle! {
    /// Override the `rebase.autoStash` configuration variable.
    ///
    /// `--no-autostash`
    no_autostash => "--no-autostash"
}

toggle! {
    /// Override an earlier `--rebase`.
    ///
    /// `--no-rebase`
    no_rebase => "--no-rebase"
}

valued! {
    /// Rebase the current branch on top of the upstream branch after fetching.
    ///
    /// `-r, --rebase[=false|true|merges|interactive]`
    rebase(value) => "--rebase"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(all, "--all")]
    #[case(allow_unrelated_histories, "--allow-unrelated-histories")]
    #[case(append, "--append")]
    #[case(autostash, "--autostash")]
    #[case(commit, "--commit")]
    #[case(edit, "--edit")]
    #[case(ff, "--ff")]
    #[case(ff_only, "--ff-only")]
    #[case(force, "--force")]
    #[case(ipv4, "--ipv4")]
    #[case(ipv6, "--ipv6")]
    #[case(keep, "--keep")]
    #[case(no_autostash, "--no-autostash")]
    #[case(no_commit, "--no-commit")]
    #[case(no_edit, "--no-edit")]
    #[case(no_ff, "--no-ff")]
    #[case(no_log, "--no-log")]
    #[case(no_rebase, "--no-rebase")]
    #[case(no_squash, "--no-squash")]
    #[case(no_stat, "--no-stat")]
    #[case(no_tags, "--no-tags")]
    #[case(no_verify_signatures, "--no-verify-signatures")]
    #[case(progress, "--progress")]
    #[case(quiet, "--quiet")]
    #[case(squash, "--squash")]
    #[case(stat, "--stat")]
    #[case(unshallow, "--unshallow")]
    #[case(update_head_ok, "--update-head-ok")]
    #[case(update_shallow, "--update-shallow")]
    #[case(verbose, "--verbose")]
    #[case(verify_signatures, "--verify-signatures")]
    fn toggle_appends_exactly_its_literal(#[case] option: fn(&mut Command), #[case] expected: &str) {
        assert_eq!(command(&[&option]).tokens(), ["pull", expected]);
    }

    #[rstest]
    #[case(Box::new(deepen("2")), &["--deepen=2"])]
    #[case(Box::new(depth("5")), &["--depth=5"])]
    #[case(Box::new(depth("")), &["--depth"])]
    #[case(Box::new(deepen("")), &["--deepen"])]
    #[case(Box::new(strategy("")), &["--strategy"])]
    #[case(Box::new(strategy_option("")), &["--strategy-option"])]
    #[case(Box::new(shallow_exclude("")), &["--shallow-exclude"])]
    #[case(Box::new(shallow_since("")), &["--shallow-since"])]
    #[case(Box::new(log("")), &["--log"])]
    #[case(Box::new(log(10)), &["--log=10"])]
    #[case(Box::new(no_recurse_submodules("")), &["--no-recurse-submodules"])]
    #[case(Box::new(no_recurse_submodules("yes")), &["--no-recurse-submodules=yes"])]
    #[case(Box::new(rebase("")), &["--rebase"])]
    #[case(Box::new(rebase("merges")), &["--rebase=merges"])]
    #[case(Box::new(recurse_submodules("")), &["--recurse-submodules"])]
    #[case(Box::new(recurse_submodules("on-demand")), &["--recurse-submodules=on-demand"])]
    #[case(Box::new(shallow_exclude("v2.0")), &["--shallow-exclude=v2.0"])]
    #[case(Box::new(shallow_since("2 weeks ago")), &["--shallow-since=2 weeks ago"])]
    #[case(Box::new(strategy("octopus")), &["--strategy=octopus"])]
    #[case(Box::new(strategy_option("ours")), &["--strategy-option=ours"])]
    #[case(Box::new(upload_pack("git-upload-pack")), &["--upload-pack", "git-upload-pack"])]
    #[case(Box::new(repository("upstream")), &["upstream"])]
    #[case(Box::new(refspec(["main", "next", "seen"])), &["main", "next", "seen"])]
    fn parameterized_flag_appends_its_tokens(
        #[case] option: Box<dyn CmdOption>,
        #[case] expected: &[&str],
    ) {
        let tokens = command(&[option.as_ref()]).finalize();
        assert_eq!(&tokens[1..], expected);
    }

    #[test]
    fn flags_are_emitted_in_application_order() {
        let cmd = command(&[&force, &quiet, &depth("5")]);
        assert_eq!(cmd.finalize(), ["pull", "--force", "--quiet", "--depth=5"]);
    }

    #[test]
    fn empty_option_list_yields_only_the_subcommand() {
        assert_eq!(command(&[]).finalize(), ["pull"]);
    }

    #[test]
    fn toggle_applied_twice_appears_twice() {
        let cmd = command(&[&no_tags, &no_tags]);
        assert_eq!(cmd.tokens(), ["pull", "--no-tags", "--no-tags"]);
    }

    #[test]
    fn full_pull_invocation_puts_positionals_last() {
        let cmd = command(&[
            &rebase("true"),
            &autostash,
            &depth(1),
            &repository("origin"),
            &refspec(["main"]),
        ]);
        assert_eq!(
            cmd.to_string(),
            "git pull --rebase=true --autostash --depth=1 origin main"
        );
    }

    proptest! {
        #[test]
        fn rebase_with_value_joins_with_equals(value in "[a-z]{1,12}") {
            let cmd = command(&[&rebase(&value)]);
            prop_assert_eq!(&cmd.tokens()[1], &format!("--rebase={value}"));
        }
    }
}
