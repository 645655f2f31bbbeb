//! Mojigrid - a terminal catalog of git emoji shortcodes.
//!
//! # Usage
//!
//! ```bash
//! mojigrid emojis-git.md
//! mojigrid --no-guide emojis-git.md
//! mojigrid --print emojis-git.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mojigrid::app::App;
use mojigrid::catalog::Catalog;
use mojigrid::remote::{EmojiMapClient, GITHUB_EMOJI_ENDPOINT};
use mojigrid::ui::style::Theme;

/// A terminal catalog of git emoji shortcodes
#[derive(Parser, Debug)]
#[command(name = "mojigrid", version, about, long_about = None)]
struct Cli {
    /// Markdown file to scan for emoji shortcodes
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Start with an explicit theme instead of the saved one
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Emoji map endpoint
    #[arg(long, value_name = "URL", default_value = GITHUB_EMOJI_ENDPOINT)]
    endpoint: String,

    /// Hide the commit guide sidebar
    #[arg(long)]
    no_guide: bool,

    /// Print the catalog to stdout instead of starting the UI
    #[arg(long)]
    print: bool,

    /// Directory for saved state (theme, favorites)
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,
}

/// Non-interactive mode: resolve the catalog and write it to stdout.
fn print_catalog(cli: &Cli) -> Result<()> {
    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let map = EmojiMapClient::new(cli.endpoint.clone())
        .load()
        .context("Failed to fetch emoji map")?;
    let catalog = Catalog::assemble(&source, &map);

    if !cli.no_guide {
        for row in catalog.guide() {
            println!("{}", row.text());
        }
        if !catalog.guide().is_empty() {
            println!();
        }
    }
    for card in catalog.cards() {
        let glyph = card.glyph.as_deref().unwrap_or(" ");
        println!("{glyph}\t{}\t{}", card.label(), card.image_url);
    }
    let stats = catalog.stats();
    println!(
        "\n{} emojis, {} commits ({} total)",
        stats.emojis, stats.commits, stats.total
    );
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    if cli.print {
        return print_catalog(&cli);
    }

    let mut app = App::new(cli.file)
        .with_endpoint(cli.endpoint)
        .with_theme(cli.theme)
        .with_guide(!cli.no_guide)
        .with_storage_dir(cli.state_dir);

    app.run().context("Application error")
}
