use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, value_parser};
use git_cmd::areas::git::{DEFAULT_GIT_BINARY, Git, GitConfig};
use git_cmd::artifacts::command::{CmdOption, Command};
use git_cmd::commands::porcelain::{fetch, merge, pull};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-cmd",
    version = "0.1.0",
    about = "Assemble and run git pull, fetch and merge invocations",
    long_about = "This tool maps its flags onto typed git option builders. \
    Flags reach git in the order they were typed, repeats included, \
    or are printed with --dry-run.",
    subcommand_required = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}

COMMANDS:
{subcommands}
",
)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_GIT_BINARY, help = "The git binary to run")]
    git: PathBuf,
    #[arg(short = 'C', global = true, help = "Run git as if started in this directory")]
    work_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Print the git invocation instead of running it")]
    dry_run: bool,
    #[arg(long, global = true, help = "Enable debug logging on stderr")]
    debug: bool,
}

type BoxedOption = Box<dyn CmdOption>;

/// How a command-line switch turns into git tokens.
#[derive(Clone, Copy)]
enum Shape {
    /// No value; one fixed token per occurrence.
    Toggle(fn(&mut Command)),
    /// Takes exactly one value.
    Value(fn(String) -> BoxedOption),
    /// `--flag` or `--flag=<value>`.
    OptionalValue(fn(String) -> BoxedOption),
    /// Positional; every value becomes its own option.
    Positional {
        index: usize,
        multiple: bool,
        option: fn(String) -> BoxedOption,
    },
}

#[derive(Clone, Copy)]
struct Switch {
    id: &'static str,
    short: Option<char>,
    help: &'static str,
    shape: Shape,
}

impl Switch {
    const fn toggle(id: &'static str, help: &'static str, option: fn(&mut Command)) -> Self {
        Self {
            id,
            short: None,
            help,
            shape: Shape::Toggle(option),
        }
    }

    const fn value(id: &'static str, help: &'static str, option: fn(String) -> BoxedOption) -> Self {
        Self {
            id,
            short: None,
            help,
            shape: Shape::Value(option),
        }
    }

    const fn optional_value(
        id: &'static str,
        help: &'static str,
        option: fn(String) -> BoxedOption,
    ) -> Self {
        Self {
            id,
            short: None,
            help,
            shape: Shape::OptionalValue(option),
        }
    }

    const fn positional(
        id: &'static str,
        help: &'static str,
        index: usize,
        multiple: bool,
        option: fn(String) -> BoxedOption,
    ) -> Self {
        Self {
            id,
            short: None,
            help,
            shape: Shape::Positional {
                index,
                multiple,
                option,
            },
        }
    }

    const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    fn to_arg(self) -> Arg {
        let arg = Arg::new(self.id).help(self.help);
        let arg = match self.shape {
            Shape::Positional { .. } => arg,
            _ => arg.long(self.id),
        };
        let arg = match self.short {
            Some(short) => arg.short(short),
            None => arg,
        };

        match self.shape {
            // Plain flags do not record where each occurrence was, so toggles are
            // value-less options defaulting to `true` on every occurrence.
            Shape::Toggle(_) => arg
                .action(ArgAction::Append)
                .num_args(0)
                .value_parser(value_parser!(bool))
                .default_missing_value("true"),
            Shape::Value(_) => arg
                .action(ArgAction::Append)
                .num_args(1)
                .value_parser(value_parser!(String)),
            Shape::OptionalValue(_) => arg
                .action(ArgAction::Append)
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("")
                .value_parser(value_parser!(String)),
            Shape::Positional {
                index, multiple, ..
            } => {
                let arg = arg.index(index).value_parser(value_parser!(String));
                if multiple {
                    arg.action(ArgAction::Append).num_args(1..)
                } else {
                    arg.action(ArgAction::Set)
                }
            }
        }
    }

    /// Options for every occurrence of this switch, keyed by command-line position.
    fn collect(self, matches: &ArgMatches, into: &mut Vec<(usize, BoxedOption)>) {
        let Some(indices) = matches.indices_of(self.id) else {
            return;
        };

        match self.shape {
            Shape::Toggle(option) => {
                into.extend(indices.map(|index| (index, Box::new(option) as BoxedOption)));
            }
            Shape::Value(option)
            | Shape::OptionalValue(option)
            | Shape::Positional { option, .. } => {
                let values = matches
                    .get_many::<String>(self.id)
                    .into_iter()
                    .flatten()
                    .cloned();
                into.extend(indices.zip(values).map(|(index, value)| (index, option(value))));
            }
        }
    }
}

fn boxed(option: impl CmdOption + 'static) -> BoxedOption {
    Box::new(option)
}

fn output_switches() -> Vec<Switch> {
    vec![
        Switch::toggle("quiet", "Suppress git's output", pull::quiet).short('q'),
        Switch::toggle("verbose", "Be verbose", pull::verbose).short('v'),
        Switch::toggle("progress", "Force progress reporting", pull::progress),
    ]
}

fn fetch_switches() -> Vec<Switch> {
    vec![
        Switch::toggle("all", "Fetch all remotes", fetch::all),
        Switch::toggle(
            "append",
            "Append to .git/FETCH_HEAD instead of overwriting it",
            fetch::append,
        )
        .short('a'),
        Switch::value("deepen", "Deepen a shallow history by DEPTH commits", |depth| {
            boxed(fetch::deepen(depth))
        }),
        Switch::value("depth", "Limit fetching to DEPTH commits", |depth| {
            boxed(fetch::depth(depth))
        }),
        Switch::toggle("force", "Allow non-fast-forward ref updates", fetch::force).short('f'),
        Switch::toggle("ipv4", "Use IPv4 addresses only", fetch::ipv4).short('4'),
        Switch::toggle("ipv6", "Use IPv6 addresses only", fetch::ipv6).short('6'),
        Switch::toggle("keep", "Keep the downloaded pack", fetch::keep).short('k'),
        Switch::toggle("no-tags", "Disable automatic tag following", fetch::no_tags),
        Switch::optional_value("recurse-submodules", "Fetch submodule commits too", |when| {
            boxed(fetch::recurse_submodules(when))
        }),
        Switch::optional_value(
            "no-recurse-submodules",
            "Do not fetch submodule commits",
            |when| boxed(fetch::no_recurse_submodules(when)),
        ),
        Switch::value(
            "shallow-exclude",
            "Exclude commits reachable from REVISION",
            |revision| boxed(fetch::shallow_exclude(revision)),
        ),
        Switch::value(
            "shallow-since",
            "Keep commits after DATE in a shallow history",
            |date| boxed(fetch::shallow_since(date)),
        ),
        Switch::toggle(
            "unshallow",
            "Convert a shallow repository to a complete one",
            fetch::unshallow,
        ),
        Switch::toggle(
            "update-head-ok",
            "Allow updating the checked out branch",
            fetch::update_head_ok,
        )
        .short('u'),
        Switch::toggle(
            "update-shallow",
            "Accept refs that require updating .git/shallow",
            fetch::update_shallow,
        ),
        Switch::value(
            "upload-pack",
            "Path of git-upload-pack on the remote",
            |path| boxed(fetch::upload_pack(path)),
        ),
    ]
}

fn merge_switches() -> Vec<Switch> {
    vec![
        Switch::toggle(
            "allow-unrelated-histories",
            "Allow merging unrelated histories",
            merge::allow_unrelated_histories,
        ),
        Switch::toggle("commit", "Commit the merge result", merge::commit),
        Switch::toggle("no-commit", "Do not commit the merge result", merge::no_commit),
        Switch::toggle("edit", "Edit the merge message", merge::edit).short('e'),
        Switch::toggle(
            "no-edit",
            "Accept the auto-generated merge message",
            merge::no_edit,
        ),
        Switch::toggle("ff", "Fast-forward when possible", merge::ff),
        Switch::toggle("ff-only", "Refuse anything but a fast-forward", merge::ff_only),
        Switch::toggle("no-ff", "Always create a merge commit", merge::no_ff),
        Switch::optional_value(
            "log",
            "Add one-line commit descriptions to the merge message",
            |n| boxed(merge::log(n)),
        ),
        Switch::toggle(
            "no-log",
            "Do not list commit descriptions in the merge message",
            merge::no_log,
        ),
        Switch::toggle(
            "squash",
            "Squash the merged changes without committing",
            merge::squash,
        ),
        Switch::toggle("no-squash", "Override --squash", merge::no_squash),
        Switch::toggle("stat", "Show a diffstat at the end of the merge", merge::stat),
        Switch::toggle("no-stat", "Do not show a diffstat", merge::no_stat).short('n'),
        Switch::value("strategy", "Merge strategy to use", |strategy| {
            boxed(merge::strategy(strategy))
        })
        .short('s'),
        Switch::value("strategy-option", "Strategy-specific option", |option| {
            boxed(merge::strategy_option(option))
        })
        .short('X'),
        Switch::toggle(
            "verify-signatures",
            "Require a valid signature on the merged tip",
            merge::verify_signatures,
        ),
        Switch::toggle(
            "no-verify-signatures",
            "Override --verify-signatures",
            merge::no_verify_signatures,
        ),
    ]
}

fn remote_switches() -> Vec<Switch> {
    vec![
        Switch::positional("repository", "The remote to use", 1, false, |remote| {
            boxed(pull::repository(remote))
        }),
        Switch::positional("refspec", "Refs to fetch", 2, true, |refspec| {
            boxed(pull::refspec([refspec]))
        }),
    ]
}

fn pull_switches() -> Vec<Switch> {
    let mut switches = output_switches();
    switches.extend(fetch_switches());
    switches.extend(merge_switches());
    switches.extend([
        Switch::optional_value("rebase", "Rebase instead of merging", |mode| {
            boxed(pull::rebase(mode))
        })
        .short('r'),
        Switch::toggle("no-rebase", "Override an earlier --rebase", pull::no_rebase),
        Switch::toggle(
            "autostash",
            "Stash local changes around the rebase",
            pull::autostash,
        ),
        Switch::toggle("no-autostash", "Override rebase.autoStash", pull::no_autostash),
    ]);
    switches.extend(remote_switches());
    switches
}

fn fetch_subcommand_switches() -> Vec<Switch> {
    let mut switches = output_switches();
    switches.extend(fetch_switches());
    switches.extend([
        // `--dry-run` is taken by this tool, so git's own dry run is renamed.
        Switch::toggle(
            "git-dry-run",
            "Show what git would do without changing anything",
            fetch::dry_run,
        ),
        Switch::value("jobs", "Parallel children for fetching", |n| {
            boxed(fetch::jobs(n))
        })
        .short('j'),
        Switch::toggle(
            "multiple",
            "Treat every positional argument as a remote",
            fetch::multiple,
        ),
        Switch::toggle(
            "prune",
            "Prune remote-tracking refs that no longer exist",
            fetch::prune,
        )
        .short('p'),
        Switch::toggle(
            "prune-tags",
            "Prune local tags that no longer exist on the remote",
            fetch::prune_tags,
        )
        .short('P'),
        Switch::toggle("tags", "Fetch all tags", fetch::tags).short('t'),
    ]);
    switches.extend(remote_switches());
    switches
}

fn merge_subcommand_switches() -> Vec<Switch> {
    let mut switches = output_switches();
    switches.extend(merge_switches());
    switches.extend([
        Switch::toggle("abort", "Abort the current conflict resolution", merge::abort),
        Switch::toggle(
            "continue",
            "Conclude a merge after resolving conflicts",
            merge::continue_merge,
        ),
        Switch::toggle("no-progress", "Do not report progress", merge::no_progress),
        Switch::value("message", "The merge commit message", |message| {
            boxed(merge::message(message))
        })
        .short('m'),
        Switch::positional("commits", "Commits to merge", 1, true, |commit| {
            boxed(merge::commits([commit]))
        }),
    ]);
    switches
}

fn switches_for(subcommand: &str) -> Vec<Switch> {
    match subcommand {
        pull::SUBCOMMAND => pull_switches(),
        fetch::SUBCOMMAND => fetch_subcommand_switches(),
        merge::SUBCOMMAND => merge_subcommand_switches(),
        _ => Vec::new(),
    }
}

fn cli() -> clap::Command {
    let subcommand = |name: &'static str, about: &'static str| {
        clap::Command::new(name)
            .about(about)
            .args(switches_for(name).into_iter().map(Switch::to_arg))
    };

    Cli::command().subcommands([
        subcommand(
            pull::SUBCOMMAND,
            "Fetch from and integrate with another repository",
        ),
        subcommand(
            fetch::SUBCOMMAND,
            "Download objects and refs from another repository",
        ),
        subcommand(
            merge::SUBCOMMAND,
            "Join two or more development histories together",
        ),
    ])
}

/// Builds the git command, keeping the order in which switches were typed.
fn to_command(subcommand: &str, matches: &ArgMatches) -> Command {
    let mut options = Vec::new();
    for switch in switches_for(subcommand) {
        switch.collect(matches, &mut options);
    }
    options.sort_by_key(|(index, _)| *index);

    let options: Vec<&dyn CmdOption> = options
        .iter()
        .map(|(_, option)| option.as_ref() as &dyn CmdOption)
        .collect();
    Command::build(subcommand, &options)
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if debug {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    init_tracing(cli.debug);

    let Some((subcommand, sub_matches)) = matches.subcommand() else {
        anyhow::bail!("no git sub-command given");
    };
    let command = to_command(subcommand, sub_matches);

    if cli.dry_run {
        println!("{command}");
        return Ok(());
    }

    let mut config = GitConfig::default().with_binary(cli.git);
    if let Some(dir) = cli.work_dir {
        config = config.with_work_dir(dir);
    }

    let output = Git::new(config).run(&command).await?;
    print!("{output}");

    Ok(())
}
