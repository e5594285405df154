use clap::{Parser, Subcommand};
use gallery_splice::{config, output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "gallery-splice")]
#[command(about = "Rebuild the homepage gallery from data/gallery.json")]
#[command(long_about = "\
Rebuild the homepage gallery from data/gallery.json

Only the region between the marker comments in index.html is rewritten:

  <!-- GALLERY:START -->
  ...generated cards...
  <!-- GALLERY:END -->

Each item in data/gallery.json becomes one card:

  { \"type\": \"project\", \"title\": ..., \"description\": ...,
    \"link\": ..., \"video\": ..., \"poster\"?: ..., \"ariaLabel\"?: ... }
  { \"type\": \"upcoming\", \"title\"?: ..., \"description\"?: ..., \"ariaLabel\"?: ... }

\"type\" defaults to \"project\". Paths and markers can be overridden with a
gallery.toml in the site root; run 'gallery-splice gen-config' for a template.")]
#[command(version = version_string())]
struct Cli {
    /// Site root containing index.html and data/
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// List rendered items after building
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite the gallery region (default)
    Build,
    /// Validate data and markers without writing
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), pipeline::BuildError> {
    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let layout = config::SiteLayout::load(&cli.root)?;
            let summary = pipeline::run(&layout)?;
            if cli.verbose {
                output::print_build_output(&summary, &cli.root);
            }
        }
        Command::Check => {
            let layout = config::SiteLayout::load(&cli.root)?;
            let summary = pipeline::check(&layout)?;
            output::print_build_output(&summary, &cli.root);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }
    Ok(())
}
