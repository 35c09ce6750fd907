mod map_file;
mod request;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use floorgen::generate_layout;
use tracing::info;
use tracing_subscriber::EnvFilter;

use map_file::{MapDocument, unix_millis_now};
use request::{GenerationRequest, RequestOverrides};

#[derive(Parser)]
#[command(author, version, about = "Generate a template-based floor layout", long_about = None)]
struct Args {
    /// TOML generation request; the stock 16x16 floor is used when omitted
    #[arg(short, long)]
    request: Option<PathBuf>,
    /// Where to write the map document
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    overrides: RequestOverrides,
    /// Echo the layout to stdout
    #[arg(long)]
    print: bool,
    /// Print a previously written map document and exit
    #[arg(long, conflicts_with_all = ["request", "output"])]
    show: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Some(path) = &args.show {
        let document = MapDocument::load(path)
            .with_context(|| format!("Failed to load map document: {}", path.display()))?;
        info!(seed = document.seed, width = document.width, height = document.height, "loaded");
        print!("{}", document.to_ascii());
        return Ok(());
    }

    let mut request = match &args.request {
        Some(path) => GenerationRequest::load(path)?,
        None => GenerationRequest::default(),
    };
    request.apply_overrides(&args.overrides);
    let output = args.output.unwrap_or_else(|| request.output_path());

    let templates = request.load_templates()?;
    let params = request.to_params(templates);

    info!(
        seed = params.seed,
        width = params.width,
        height = params.height,
        "running map generator"
    );
    let result = generate_layout(&params).context("Map generation failed")?;

    let document = MapDocument::new(&params, &result.layout, unix_millis_now());
    document
        .write_atomic(&output)
        .with_context(|| format!("Failed to write map document: {}", output.display()))?;

    if args.print {
        print!("{}", result.layout.to_ascii());
    }

    info!(
        path = %output.display(),
        rooms = result.placements.len(),
        constraints = params.template_data.len(),
        "map generated"
    );
    Ok(())
}
