//! Personal Belongings Manager - track categories of belongings in a YAML file.
//!
//! Items carry a description, a season tag (summer, winter or neutral) and an
//! optional display index. Everything is stored in a single YAML document.

use belongings::cli::{CategoryArgs, CliResult, ConfigArgs, GlobalArgs, ItemArgs, ShowArgs};
use belongings::constants::{APP_BINARY_NAME, APP_NAME};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Personal Belongings Manager - track what you own, by category and season
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    globals: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage categories
    Category(CategoryArgs),
    /// Manage items
    Item(ItemArgs),
    /// Show all categories and items as YAML
    Show(ShowArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self, globals: &GlobalArgs) -> CliResult<()> {
        match self {
            Self::Category(args) => args.execute(globals),
            Self::Item(args) => args.execute(globals),
            Self::Show(args) => args.execute(globals),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.command.execute(&cli.globals) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code.code());
    }
}
