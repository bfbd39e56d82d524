//! folio CLI
//!
//! `folio build` renders the site from a content directory into a single
//! HTML file; `folio theme` reads or toggles the persisted theme.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use folio_site::{
    build_site, load_theme, render_page, toggle_theme, JsonFileStore, SiteError,
};

#[derive(Parser)]
#[command(name = "folio", version, about = "Personal site generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site into an HTML file
    Build {
        /// Content directory holding hero.md and publications.bib
        #[arg(long, default_value = "content")]
        content: PathBuf,
        /// Output HTML file
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
        /// Persisted state file (theme)
        #[arg(long, default_value = ".folio-state.json")]
        state: PathBuf,
    },
    /// Print the persisted theme, optionally toggling it first
    Theme {
        /// Flip between light and dark before printing
        #[arg(long)]
        toggle: bool,
        /// Persisted state file (theme)
        #[arg(long, default_value = ".folio-state.json")]
        state: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run(Cli::parse()).await {
        error!(%err, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), SiteError> {
    match cli.command {
        Command::Build {
            content,
            out,
            state,
        } => {
            // Theme applies before any content loads, same as page startup
            let store = JsonFileStore::open(&state)?;
            let theme = load_theme(&store);

            let page = build_site(&content).await?;
            let html = render_page(&page, theme);
            std::fs::write(&out, html).map_err(|source| SiteError::Write {
                name: out.display().to_string(),
                source,
            })?;
            info!(out = %out.display(), theme = theme.as_str(), "site written");
        }
        Command::Theme { toggle, state } => {
            let mut store = JsonFileStore::open(&state)?;
            let theme = if toggle {
                toggle_theme(&mut store)?
            } else {
                load_theme(&store)
            };
            println!("{}", theme.as_str());
        }
    }
    Ok(())
}
