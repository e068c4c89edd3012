use adventurelib::config::Config;
use adventurelib::load_world_dir;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

// cargo run --bin check-content -- --content-dir content --subdir castle

#[derive(Debug, Parser)]
#[command(name = "check-content", version, about = "Validate YAML location files and summarize the world")]
struct Args {
    /// Base directory holding the YAML files (defaults to $CONTENT_DIR)
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Subdirectory under the content dir that contains the YAML files
    #[arg(long)]
    subdir: Option<String>,

    /// TOML config file to use instead of the environment
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dump the loaded world as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    init_tracing(&cfg)?;

    let content_dir = args.content_dir.unwrap_or_else(|| cfg.content_dir.clone());

    let world = load_world_dir(&content_dir, args.subdir.as_deref())
        .context("content check failed")?;

    if args.json {
        println!("{}", world.to_json_pretty()?);
        return Ok(());
    }

    for location in world.locations() {
        println!("✓ {location}");
        if let Some(kind) = location.kind() {
            println!("    type:  {kind}");
        }
        if let Some(image) = location.image() {
            println!("    image: {image}");
        }
        for action in location.actions() {
            if action.aliases().is_empty() {
                println!("    • {} [{}]", action.action(), action.kind());
            } else {
                println!(
                    "    • {} [{}] (aliases: {})",
                    action.action(),
                    action.kind(),
                    action.aliases().join(", ")
                );
            }
        }
    }

    println!(
        "\n✨ {} location(s), {} action(s) in {}",
        world.len(),
        world.action_count(),
        content_dir.display()
    );

    Ok(())
}

fn init_tracing(cfg: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.log_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;

    Ok(())
}
