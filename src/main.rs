//! CLI entry point for page-collections

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "page-collections")]
#[command(version)]
#[command(about = "Curated, ordered collections of pages rendered as HTML lists", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site with a sample collection
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new page or page collection
    New {
        /// Record type (page, page-collection)
        #[arg(short, long, default_value = "page")]
        kind: String,

        /// Publication status (draft, live)
        #[arg(short, long, default_value = "draft")]
        status: String,

        /// Title of the new record
        title: String,
    },

    /// List live pages or collections
    List {
        /// Type of content to list (pages, collections)
        #[arg(default_value = "pages")]
        r#type: String,
    },

    /// Render the collection shown on a page
    #[command(alias = "r")]
    Render {
        /// Id of the page being viewed
        page_id: String,

        /// Indentation depth of the outermost element, in tabs
        #[arg(long, default_value = "0")]
        depth: usize,
    },

    /// Print admin option declarations as JSON
    Options {
        /// Which declarations (site, display, types)
        #[arg(default_value = "display")]
        kind: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "page_collections=debug,info"
    } else {
        "page_collections=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            page_collections::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            kind,
            status,
            title,
        } => {
            let site = page_collections::PageCollections::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            page_collections::commands::new::run(&site, &title, &kind, &status)?;
        }

        Commands::List { r#type } => {
            let site = page_collections::PageCollections::new(&base_dir)?;
            page_collections::commands::list::run(&site, &r#type)?;
        }

        Commands::Render { page_id, depth } => {
            let site = page_collections::PageCollections::new(&base_dir)?;
            page_collections::commands::render::run(&site, &page_id, depth)?;
        }

        Commands::Options { kind } => {
            let site = page_collections::PageCollections::new(&base_dir)?;
            page_collections::commands::options::run(&site, &kind)?;
        }

        Commands::Version => {
            println!("page-collections version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
