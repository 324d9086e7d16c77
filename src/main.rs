use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use fnorm::rename::{process_path, Outcome};
use fnorm::{log_status, Error};

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "fnorm")]
#[command(version = VERSION)]
#[command(about = "Normalize file names to a safe, consistent format")]
#[command(after_help = "\
Normalization rules:
  - Spaces become hyphens
  - Converted to lowercase
  - Leading/trailing spaces and dots trimmed
  - Special characters: / -> -or-, & -> -and-, @ -> -at-, % -> -percent
  - Accented letters and typographic symbols simplified to ASCII
  - Remaining forbidden characters replaced with hyphens
  - Consecutive hyphens collapsed, leading hyphens trimmed
  - Extensions lowercased, otherwise untouched

Examples:
  fnorm \"My Document.PDF\"               # -> my-document.pdf
  fnorm \"Photo & Video.mov\"             # -> photo-and-video.mov
  fnorm \"tcp/udp guide.txt\"             # -> tcp-or-udp-guide.txt
  fnorm --dry-run \"File With Spaces.txt\"  # preview without changes")]
struct Cli {
    /// Show what would be renamed without making changes
    #[arg(long)]
    dry_run: bool,

    /// Emit one JSON result object per path instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Files or directories to rename (no recursion)
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut renamed = 0usize;
    let mut failed = 0usize;

    for path in &cli.paths {
        let result = process_path(path, cli.dry_run);

        match &result {
            Ok(Outcome::Renamed { .. }) => renamed += 1,
            Ok(_) => {}
            Err(_) => failed += 1,
        }

        if cli.json {
            output::print_result(path, &result);
        } else {
            print_human(path, &result, cli.dry_run);
        }
    }

    if !cli.json && !cli.dry_run && cli.paths.len() > 1 {
        log_status!(
            "fnorm",
            "{} renamed, {} failed, {} total",
            renamed,
            failed,
            cli.paths.len()
        );
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_human(path: &Path, result: &Result<Outcome, Error>, dry_run: bool) {
    match result {
        Ok(Outcome::Unchanged { name }) => {
            if !dry_run {
                println!("\u{2713} {} (no changes needed)", name);
            }
        }
        Ok(Outcome::WouldRename { old, new }) => {
            println!("Would rename: {} -> {}", old, new);
        }
        Ok(Outcome::Renamed { old, new }) => {
            println!("Renamed: {} -> {}", old, new);
        }
        Err(err) => {
            eprintln!("Error processing {}: {}", path.display(), err);
        }
    }
}
