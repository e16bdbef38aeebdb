use clap::{Parser, Subcommand};
use cover_resize::imaging::{CoverTransform, RustBackend};
use cover_resize::{config, output, process, scan};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "cover-resize")]
#[command(about = "Resize embedded cover art in audio files")]
#[command(long_about = "\
Resize embedded cover art in audio files

Every front cover found is stretched to a 500x500 square and re-encoded as a
quality-95 JPEG, then written back into the file's tag.

Supported formats:

  .flac   first front-cover PICTURE block (other pictures kept)
  .mp3    first APIC frame (all APIC frames replaced by one)
  .wav    as .mp3, inside the RIFF ID3 chunk
  .m4a    first covr artwork (replaced by a single JPEG)
  .ogg    first METADATA_BLOCK_PICTURE

Paths may be files or folders; folders are searched recursively.

Run 'cover-resize gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of status lines
    #[arg(long, global = true)]
    json: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resize the cover art of the given files and folders
    Resize {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// List the files a resize would touch, without writing anything
    Scan {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Resize { paths } => {
            let config = config::load_config(cli.config.as_deref())?;
            let found = scan::scan(&paths, &config.scan)?;

            let backend = RustBackend::new();
            let transform = CoverTransform::from_config(&backend, &config.cover);

            if cli.json {
                let summary = process::process_scan(&found, &transform, |_| {});
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_scan_header(&found);
                let summary =
                    process::process_scan(&found, &transform, output::print_file_report);
                if !found.is_empty() {
                    output::print_summary(&summary);
                }
            }
        }
        Command::Scan { paths } => {
            let config = config::load_config(cli.config.as_deref())?;
            let found = scan::scan(&paths, &config.scan)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                output::print_scan_listing(&found);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so they never mix with status lines or JSON.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
