//! # papyr CLI
//!
//! Command-line interface for the papyr blog content pipeline.

mod commands;
mod payload;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "papyr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "papyr.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new papyr site
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// List articles, newest first
    List {
        /// Include unpublished articles
        #[arg(long)]
        all: bool,

        /// Only featured articles
        #[arg(long)]
        featured: bool,

        /// Filter by locale (articles without one belong to the default locale)
        #[arg(long)]
        locale: Option<String>,

        /// Maximum articles to show
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch a single article in structured form
    Show {
        /// Article slug
        slug: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ArticleFormat::Json)]
        format: ArticleFormat,
    },

    /// Tag listings, clouds, and relations
    Tags {
        /// Show article counts per tag
        #[arg(long)]
        counts: bool,

        /// Weighted tag cloud
        #[arg(long)]
        cloud: bool,

        /// Tags sharing articles with the given tag
        #[arg(long)]
        related: Option<String>,

        /// Filter by locale
        #[arg(long)]
        locale: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Category listings, hierarchy, and breadcrumbs
    Categories {
        /// Show article counts per category
        #[arg(long)]
        counts: bool,

        /// Nested category tree
        #[arg(long)]
        tree: bool,

        /// Parent/children hierarchy groups
        #[arg(long)]
        hierarchy: bool,

        /// Breadcrumb segments for the given category path
        #[arg(long)]
        breadcrumb: Option<String>,

        /// Sibling categories of the given category path
        #[arg(long)]
        related: Option<String>,

        /// Filter by locale
        #[arg(long)]
        locale: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fuzzy search across titles, descriptions, excerpts, and tags
    Search {
        /// Search query
        query: String,

        /// Maximum results to return
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Filter by locale before searching
        #[arg(long)]
        locale: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_site(path.as_deref()),
        Commands::List {
            all,
            featured,
            locale,
            limit,
            json,
        } => {
            let opts = commands::ListOptions {
                all,
                featured,
                locale,
                limit,
                json,
            };
            commands::list_articles(&cli.config, opts)
        }
        Commands::Show { slug, format } => commands::show_article(&cli.config, &slug, format),
        Commands::Tags {
            counts,
            cloud,
            related,
            locale,
            json,
        } => {
            let opts = commands::TagOptions {
                counts,
                cloud,
                related,
                locale,
                json,
            };
            commands::show_tags(&cli.config, opts)
        }
        Commands::Categories {
            counts,
            tree,
            hierarchy,
            breadcrumb,
            related,
            locale,
            json,
        } => {
            let opts = commands::CategoryOptions {
                counts,
                tree,
                hierarchy,
                breadcrumb,
                related,
                locale,
                json,
            };
            commands::show_categories(&cli.config, opts)
        }
        Commands::Search {
            query,
            limit,
            locale,
            json,
        } => {
            let opts = commands::SearchOptions {
                limit,
                locale,
                json,
            };
            commands::search_articles(&cli.config, &query, opts)
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum ArticleFormat {
    Json,
    Markdown,
    Raw,
}
