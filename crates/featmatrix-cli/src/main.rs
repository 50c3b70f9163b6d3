//! `featmatrix` - render capability matrices and assemble lint plugin lists.
//!
//! ```text
//! featmatrix render --features-file docs/clients.json --output docs/clients.svg
//! featmatrix render --config matrix.yaml
//! featmatrix lint-plugins --manifest package.json --output .remarkrc
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use featmatrix::{render_features, RenderOptions};
use featmatrix_lint::build_lint_config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "featmatrix")]
#[command(version)]
#[command(about = "Render feature matrices and build lint plugin lists")]
struct Cli {
    /// Log progress (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a features document as an SVG capability matrix
    Render(RenderArgs),
    /// Print or write the remark-lint plugin list for a package.json
    LintPlugins(LintPluginsArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// YAML or JSON file with render options (featuresFile, has, hasNot, svgResultsFile, stylesFile)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of {name, features} records
    #[arg(long)]
    features_file: Option<PathBuf>,

    /// Cell content for a supported feature
    #[arg(long)]
    has: Option<String>,

    /// Cell content for an unsupported feature
    #[arg(long)]
    has_not: Option<String>,

    /// Path of the SVG to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Style document embedded in the SVG
    #[arg(long)]
    styles: Option<PathBuf>,
}

impl RenderArgs {
    /// Config file (or defaults) first, then command-line overrides.
    fn options(self) -> Result<RenderOptions> {
        let mut options = match &self.config {
            Some(path) => RenderOptions::load(path)?,
            None => RenderOptions::default(),
        };
        if let Some(path) = self.features_file {
            options = options.features_file(path);
        }
        if let Some(marker) = self.has {
            options = options.has(marker);
        }
        if let Some(marker) = self.has_not {
            options = options.has_not(marker);
        }
        if let Some(path) = self.output {
            options = options.svg_results_file(path);
        }
        if let Some(path) = self.styles {
            options = options.styles_file(path);
        }
        Ok(options)
    }
}

#[derive(Args)]
struct LintPluginsArgs {
    /// Manifest to read dependencies from
    #[arg(long, default_value = "package.json")]
    manifest: PathBuf,

    /// Write the configuration here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_render(args: RenderArgs) -> Result<()> {
    let options = args.options()?;
    let summary = render_features(&options).with_context(|| {
        format!(
            "rendering {} to {}",
            options.features_file.display(),
            options.svg_results_file.display()
        )
    })?;
    println!(
        "Wrote {} ({} entities, {} features)",
        summary.output.display(),
        summary.entities,
        summary.features
    );
    Ok(())
}

fn run_lint_plugins(args: LintPluginsArgs) -> Result<()> {
    let config = build_lint_config(&args.manifest)
        .with_context(|| format!("building lint plugins from {}", args.manifest.display()))?;
    let json = config.to_json_pretty()?;
    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(output = %path.display(), plugins = config.plugins.len(), "wrote lint config");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render(args) => run_render(args),
        Command::LintPlugins(args) => run_lint_plugins(args),
    }
}
