use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use mdcast::client::ApiError;
use mdcast::exit_codes;

mod commands;

#[derive(Parser)]
#[command(
    name = "mdcast",
    author,
    version,
    about = "Post Markdown to Twitter and LinkedIn from the terminal",
    long_about = "mdcast converts a Markdown document to platform-appropriate text \
                  and posts it. Long posts are split into Twitter threads \
                  automatically; LinkedIn headings get Unicode bold emphasis. \
                  Structured JSON output is available for programmatic use."
)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post content from a markdown file
    Post(PostArgs),

    /// View your feed
    Feed {
        /// Network to read (twitter or linkedin)
        network: String,

        /// Number of items to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// View your direct messages
    Messages {
        /// Network to read (twitter or linkedin)
        network: String,

        /// Number of messages to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct PostArgs {
    /// Path to the markdown file to post
    #[arg(short, long)]
    file: PathBuf,

    /// Networks to post to (comma-separated: twitter,linkedin)
    #[arg(short = 'n', long, default_value = "twitter")]
    network: String,

    /// Preview the rendered post without publishing
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set up API tokens interactively
    Init,
    /// Show the current configuration with secrets redacted
    Show,
    /// Set a configuration value, e.g. twitter.access_token
    Set { key: String, value: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Post(args) => commands::post::run(args, &cli),
        Commands::Feed { network, count } => commands::feed::run(network, *count, &cli),
        Commands::Messages { network, count } => commands::messages::run(network, *count, &cli),
        Commands::Config { action } => commands::config::run(action, &cli),
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "error".red().bold());
        let code = if e.downcast_ref::<ApiError>().is_some() {
            exit_codes::OPERATION_FAILED
        } else {
            exit_codes::TOOL_ERROR
        };
        process::exit(code);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
