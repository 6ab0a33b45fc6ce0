//! Command-line entry point for generating Android adaptive icons.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use adaptive_icon_renderer::{
    BackgroundChoice, Color, IconRenderer, OutputSet, RenderConfig, Result, SourceImage,
    manifest_background,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate Android adaptive launcher icons from a source icon.
///
/// Creates foreground, background and monochrome layers for every mipmap
/// density, plus a flattened `ic_launcher.png` preview per density.
#[derive(Parser, Debug)]
#[command(name = "adaptive-icons", version, about)]
struct Cli {
    /// Path to the source icon image.
    #[arg(short, long, default_value = "assets/images/icon.png")]
    input: PathBuf,

    /// Directory for the base-size icon assets.
    #[arg(short, long, default_value = "assets/images")]
    output: PathBuf,

    /// Android resource directory receiving the mipmap-* directories.
    #[arg(short, long, default_value = "android/app/src/main/res")]
    res_dir: PathBuf,

    /// Project manifest providing the default background color.
    #[arg(short, long, default_value = "app.json")]
    manifest: PathBuf,

    /// Directory that relative paths are resolved against.
    #[arg(short, long, default_value = ".")]
    project_dir: PathBuf,

    /// Background color in hex (e.g. #4ECDC4). Overrides corner detection
    /// and the manifest.
    #[arg(short, long, value_parser = parse_color)]
    background_color: Option<Color>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long)]
    debug: bool,
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    s.parse::<Color>().map_err(|e| e.to_string())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let resolve = |path: &Path| cli.project_dir.join(path);

    let config = RenderConfig::default();
    let background = match cli.background_color {
        Some(color) => BackgroundChoice::Explicit(color),
        None => BackgroundChoice::Inferred {
            fallback: manifest_background(&resolve(&cli.manifest), config.default_background),
        },
    };
    match background {
        BackgroundChoice::Explicit(color) => {
            tracing::info!(%color, "Using explicit background color");
        }
        BackgroundChoice::Inferred { fallback } => {
            tracing::info!(%fallback, "Using background color from corners or fallback");
        }
    }

    let source = SourceImage::open(&resolve(&cli.input))?;
    let output = OutputSet::new(resolve(&cli.output), resolve(&cli.res_dir));
    IconRenderer::new(config).generate(&source, background, &output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(written) => {
            tracing::info!(files = written.len(), "All icons generated successfully");
            for path in &written {
                tracing::debug!(path = %path.display(), "Generated");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Icon generation failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
