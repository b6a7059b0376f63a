//! # vernis
//!
//! Vernis - Variant-driven, server-rendered UI components.
//!
//! ## Name Origin
//!
//! **Vernis** is French for varnish: the final coat that gives a piece its
//! finish. This binary is the command-line entry point for resolving variant
//! classes, sanitizing props, rendering components and writing the gallery.

mod commands;
mod config;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vernis")]
#[command(about = "Variant-driven, server-rendered UI components", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (`RUST_LOG` takes precedence)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the class string for a component's variant configuration
    #[command(visible_alias = "tint")]
    Resolve(commands::resolve::ResolveArgs),

    /// Strip presentation-only props from a JSON prop bag
    Sanitize(commands::sanitize::SanitizeArgs),

    /// Render a component to HTML
    #[command(visible_alias = "atelier")]
    Render(commands::render::RenderArgs),

    /// Render a landing page from section layouts
    Page(commands::page::PageArgs),

    /// Write the component gallery
    #[command(visible_alias = "musea")]
    Gallery(commands::gallery::GalleryArgs),

    /// Print the JSON Schema for vernis.config.json
    Schema,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(None);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Sanitize(args) => commands::sanitize::run(args, &config.render),
        Commands::Render(args) => commands::render::run(args, &config.render),
        Commands::Page(args) => commands::page::run(args, &config.render),
        Commands::Gallery(args) => commands::gallery::run(args, &config),
        Commands::Schema => {
            println!("{}", config::VERNIS_CONFIG_SCHEMA);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\x1b[31merror:\x1b[0m {}", e);
        std::process::exit(1);
    }
}
