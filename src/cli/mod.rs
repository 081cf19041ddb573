//! Command-line interface for `fixdesk`.
//!
//! One grammar serves two modes: with a subcommand, `fxd` runs it
//! against a freshly seeded store and exits; without one, it opens an
//! interactive session where the same commands share a single store
//! until the session ends.

pub mod commands;
pub mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fixdesk_lib::IssueStore;

use crate::config::Config;
use crate::logging;

/// `fixdesk` (fxd) - Session-scoped issue desk.
#[derive(Parser, Debug)]
#[command(name = "fxd")]
#[command(
    author,
    version,
    about = "Session-scoped issue desk (transient, in-memory)",
    long_about = None,
    after_help = "State is transient: every run starts fresh and session edits vanish on exit.\nRun without a command to open an interactive session."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Start with an empty store instead of the demo dataset
    #[arg(long, global = true)]
    pub empty: bool,

    /// Path to a config file (default: ./fixdesk.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to run; omit to open an interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report a new issue
    Create(CreateArgs),

    /// Attach an improvement suggestion to an issue
    Suggest(SuggestArgs),

    /// Vote a suggestion helpful or not helpful
    Vote(VoteArgs),

    /// Mark an issue as resolved
    Resolve(ResolveArgs),

    /// Reopen an issue with supporting evidence
    Reopen(ReopenArgs),

    /// List issues through the current view criteria
    List(ListArgs),

    /// Show full details for one issue
    Show(ShowArgs),

    /// Search issue titles, keywords, and type names
    Search(SearchArgs),

    /// Adjust or inspect the view criteria
    Filter(FilterCommand),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue title
    pub title: String,

    /// Issue category: common, frontend, backend, or qa
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_: Option<String>,

    /// Who is reporting the issue
    #[arg(long, value_name = "NAME", env = "FIXDESK_REPORTER")]
    pub raised_by: Option<String>,

    /// Search keywords, comma-separated (repeatable)
    #[arg(short, long, value_name = "WORDS")]
    pub keywords: Vec<String>,

    /// Longer description of the problem
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Attachment reference to file with the report
    #[arg(long, value_name = "REF")]
    pub attachment: Option<String>,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Issue ID (full, or a unique fragment)
    pub issue: String,

    /// Suggestion text
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,
}

#[derive(Args, Debug)]
pub struct VoteArgs {
    /// Issue ID (full, or a unique fragment)
    pub issue: String,

    /// Suggestion reference (`s1`, or bare `1`)
    pub suggestion: String,

    /// How the vote lands
    #[arg(value_enum)]
    pub verdict: VoteVerdict,
}

/// How a suggestion vote lands.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteVerdict {
    /// The suggestion helped
    Helpful,
    /// The suggestion did not help
    #[value(alias = "unhelpful")]
    NotHelpful,
}

impl VoteVerdict {
    #[must_use]
    pub const fn is_helpful(self) -> bool {
        matches!(self, Self::Helpful)
    }
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Issue ID (full, or a unique fragment)
    pub issue: String,
}

#[derive(Args, Debug)]
pub struct ReopenArgs {
    /// Issue ID (full, or a unique fragment)
    pub issue: String,

    /// Attachment reference backing the reopen
    #[arg(value_name = "REF")]
    pub attachment: String,
}

/// Criteria given here persist for the rest of the session until
/// changed or cleared with `filter clear`.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Status criterion: all, pending, or resolved
    #[arg(short, long, value_name = "STATUS")]
    pub status: Option<String>,

    /// Type criterion: all, common, frontend, backend, or qa
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_: Option<String>,

    /// Search term applied to titles, keywords, and type names
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue ID (full, or a unique fragment)
    pub issue: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term (words are joined with spaces)
    #[arg(required = true, value_name = "TERM")]
    pub term: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FilterCommand {
    /// Filter subcommand; omit to show the current criteria
    #[command(subcommand)]
    pub command: Option<FilterSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum FilterSubcommand {
    /// Set the status criterion (all, pending, or resolved)
    Status {
        /// Status value
        value: String,
    },

    /// Set the type criterion (all, common, frontend, backend, or qa)
    Type {
        /// Type value
        value: String,
    },

    /// Set the search term; omit the term to clear it
    Search {
        /// Term to match against titles, keywords, and type names
        term: Vec<String>,
    },

    /// Reset all criteria to show everything
    Clear,

    /// Show the current criteria
    Show,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if logging or configuration setup fails, or if a
/// one-shot command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.json)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = Config::load(cli.config.as_deref())?;
    let mut store = if config.seed_sample_data && !cli.empty {
        IssueStore::with_sample_data()
    } else {
        IssueStore::new()
    };
    tracing::debug!(issues = store.len(), "store ready");

    match cli.command {
        Some(command) => execute_command(&mut store, &command, &config, cli.json),
        None => session::run(&mut store, &config, cli.json),
    }
}

/// Dispatch one parsed command against the store.
///
/// Shared by one-shot mode and the interactive session.
///
/// # Errors
///
/// Returns the command's error; a failed command never leaves the
/// store partially mutated.
pub fn execute_command(
    store: &mut IssueStore,
    command: &Commands,
    config: &Config,
    json: bool,
) -> Result<()> {
    match command {
        Commands::Create(args) => commands::create::execute(store, args, config, json),
        Commands::Suggest(args) => commands::suggest::execute(store, args, json),
        Commands::Vote(args) => commands::vote::execute(store, args, json),
        Commands::Resolve(args) => commands::resolve::execute(store, args, json),
        Commands::Reopen(args) => commands::reopen::execute(store, args, json),
        Commands::List(args) => commands::list::execute(store, args, json),
        Commands::Show(args) => commands::show::execute(store, args, json),
        Commands::Search(args) => commands::search::execute(store, args, json),
        Commands::Filter(args) => commands::filter::execute(store, args, json),
        Commands::Version => commands::version::execute(json),
    }
}
