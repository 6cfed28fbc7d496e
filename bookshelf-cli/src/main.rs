//! Bookshelf CLI - browse the book catalog from a terminal

mod commands;

use anyhow::Result;
use bookshelf_core::Theme;
use clap::{Parser, Subcommand};
use commands::FilterArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a page size (must be at least 1)
fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dataset JSON file (defaults to the bundled sample catalog)
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// Override the dataset's page size
    #[arg(long, global = true, value_parser = parse_page_size)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books matching the filters, one page at a time
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the details of a single book
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all genres
    Genres {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all authors
    Authors {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the catalog page to a static HTML file
    Render {
        /// Output file path
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Color theme (day, night)
        #[arg(long, default_value = "day")]
        theme: Theme,

        /// Open the detail overlay for this book id
        #[arg(long)]
        book: Option<String>,
    },
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

    let catalog = commands::load_catalog(cli.dataset.as_deref(), cli.page_size)?;

    match cli.command {
        Commands::List { filters, json } => commands::list(catalog, &filters, json),

        Commands::Show { id, json } => commands::show(&catalog, &id, json),

        Commands::Genres { json } => commands::genres(&catalog, json),

        Commands::Authors { json } => commands::authors(&catalog, json),

        Commands::Render {
            output,
            filters,
            theme,
            book,
        } => commands::render(catalog, &filters, theme, book.as_deref(), &output),
    }
}
