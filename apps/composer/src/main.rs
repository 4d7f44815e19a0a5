//! Composer CLI: parses generated resume text and substitutes it into a
//! document template. Stands in for the service layer that normally invokes
//! the pipeline.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use composer::config::Config;
use composer::extract;
use composer::pipeline;
use composer::templates::TemplateStore;

#[derive(Debug, Parser)]
#[command(name = "composer", version, about = "Resume parsing and templating pipeline")]
struct Cli {
    /// Raw generated resume text; "-" reads stdin.
    input: PathBuf,

    /// Template name to render with (default: DEFAULT_TEMPLATE).
    #[arg(short, long)]
    template: Option<String>,

    /// Write the rendered document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parse legacy bold-header markers instead of bracketed pairs.
    #[arg(long)]
    legacy: bool,

    /// Emit the extracted field record as JSON instead of rendering.
    #[arg(long)]
    record_json: bool,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let cli = Cli::parse();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("composer v{}", env!("CARGO_PKG_VERSION"));

    let raw = read_input(&cli.input)?;

    let document = if cli.record_json {
        let record = if cli.legacy {
            extract::legacy::extract(&raw)
        } else {
            extract::extract(&raw)
        };
        serde_json::to_string_pretty(&record)?
    } else {
        let store = load_templates(&config)?;
        let name = cli.template.as_deref().unwrap_or(&config.default_template);
        let template = store.get(name)?;
        info!(template = %template.name, "rendering document");
        if cli.legacy {
            pipeline::compose_legacy(&raw, &template.html)
        } else {
            pipeline::compose(&raw, &template.html)
        }
    };

    match &cli.output {
        Some(path) => fs::write(path, document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{document}"),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Loads templates from the configured directory, falling back to the
/// embedded template when the directory is missing or holds none.
fn load_templates(config: &Config) -> Result<TemplateStore> {
    if config.template_dir.is_dir() {
        let store = TemplateStore::load_dir(&config.template_dir)?;
        if !store.is_empty() {
            info!(
                dir = %config.template_dir.display(),
                templates = ?store.names(),
                "templates loaded"
            );
            return Ok(store);
        }
        warn!(
            dir = %config.template_dir.display(),
            "template directory holds no templates; using the built-in one"
        );
    } else {
        warn!(
            dir = %config.template_dir.display(),
            "template directory not found; using the built-in one"
        );
    }
    Ok(TemplateStore::builtin())
}
