//! Bookshelf CLI - Query a personal library catalog from the command line

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON catalog file
    #[arg(short, long, global = true, env = "BOOKSHELF_CATALOG")]
    catalog: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Sort key for `arrange`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortKey {
    Title,
    Author,
    Published,
}

/// Grouping key for `group`
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GroupKey {
    Author,
    Year,
}

#[derive(Subcommand)]
enum Commands {
    /// List books in the order they were added
    List,

    /// Arrange books by title or another key
    Arrange {
        /// Sort key
        #[arg(short, long, value_enum, default_value = "title")]
        by: SortKey,

        /// Reverse the order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Group books by author or publication year
    Group {
        /// Grouping key
        #[arg(short, long, value_enum)]
        by: GroupKey,
    },

    /// Find books whose title contains a phrase
    Find {
        /// Phrase to look for (case-insensitive)
        query: String,

        /// Only books published after this year
        #[arg(long)]
        after: Option<i32>,

        /// Only books published before this year
        #[arg(long)]
        before: Option<i32>,
    },

    /// Show reading progress
    Progress,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let shelf = commands::load_shelf(cli.catalog.as_deref())?;

    match cli.command {
        Commands::List => commands::list(&shelf, cli.json),

        Commands::Arrange { by, reverse } => commands::arrange(&shelf, by, reverse, cli.json),

        Commands::Group { by } => commands::group(&shelf, by, cli.json),

        Commands::Find {
            query,
            after,
            before,
        } => commands::find(&shelf, &query, after, before, cli.json),

        Commands::Progress => commands::progress(&shelf, cli.json),
    }
}
