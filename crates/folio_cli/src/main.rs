//! Folio CLI
//!
//! Check site configs, list their pages, and replay recorded input traces.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_core::{Backdrop, PageSpec, SiteConfig};

mod trace;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Folio page stack tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a site config
    Check {
        /// Site config file
        config: PathBuf,
    },

    /// List the pages of a site
    Pages {
        /// Site config file (built-in site if omitted)
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Replay an input trace and print the resulting events as JSON lines
    Replay {
        /// Trace script
        trace: PathBuf,

        /// Site config file (built-in site if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the built-in site config to a file
    Init {
        /// Output path
        #[arg(default_value = "site.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Check { config } => cmd_check(&config),
        Commands::Pages { config, json } => cmd_pages(config.as_deref(), json),
        Commands::Replay { trace, config } => cmd_replay(&trace, config.as_deref()),
        Commands::Init { path, force } => cmd_init(&path, force),
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load site config {}", path.display())),
        None => {
            warn!("No site config given, using the built-in site");
            Ok(SiteConfig::default())
        }
    }
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = load_config(Some(path))?;
    info!(
        "{}: {} pages, {} reachable before unlock",
        path.display(),
        config.page_count(),
        config.unlock_gate
    );
    println!("ok");
    Ok(())
}

fn backdrop_label(backdrop: &Backdrop) -> String {
    match backdrop {
        Backdrop::Light => "light".to_string(),
        Backdrop::Dark => "dark".to_string(),
        Backdrop::Split(split) => format!(
            "split {:?} {:?}/{:?}",
            split.mapping, split.upper, split.lower
        )
        .to_lowercase(),
    }
}

fn page_flags(page: &PageSpec, index: usize, gate: usize) -> String {
    let mut flags = Vec::new();
    if index >= gate {
        flags.push("locked");
    }
    if page.terminal {
        flags.push("terminal");
    }
    if page.reset_on_leave {
        flags.push("reset");
    }
    flags.join(",")
}

fn cmd_pages(path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config.pages)?);
        return Ok(());
    }

    println!("{:>3}  {:<14} {:<11} {:<28} flags", "#", "name", "kind", "backdrop");
    for (index, page) in config.pages.iter().enumerate() {
        println!(
            "{:>3}  {:<14} {:<11} {:<28} {}",
            index,
            page.name,
            format!("{:?}", page.kind).to_lowercase(),
            backdrop_label(&page.backdrop),
            page_flags(page, index, config.unlock_gate)
        );
    }
    Ok(())
}

fn cmd_replay(trace_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let script = trace::Script::load(trace_path)?;
    info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        trace_path.display()
    );

    for line in trace::replay(config, &script)? {
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    SiteConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Site config written to {}", path.display());
    Ok(())
}
