use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use spimidx::builder::IndexBuilder;
use spimidx::core::config::Config;
use spimidx::core::error::ErrorKind;

/// Builds a disk-backed inverted index from an HTML corpus.
#[derive(Parser, Debug)]
#[command(name = "spimidx-build")]
struct Args {
    /// Path to a JSON config file. Falls back to built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} failed to load config: {}", "error:".red().bold(), err);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut builder = IndexBuilder::new(config.clone());
    match builder.build() {
        Ok(()) => {
            println!("{}", "index built successfully".green().bold());
        }
        Err(err) => match err.kind {
            ErrorKind::MissingIndexDir => {
                eprintln!(
                    "{} index directory {} does not exist",
                    "warning:".yellow().bold(),
                    config.index_dir.display()
                );
                if confirm_create_dir() {
                    if let Err(create_err) = std::fs::create_dir_all(&config.index_dir) {
                        eprintln!("{} {}", "error:".red().bold(), create_err);
                        std::process::exit(1);
                    }
                    let mut builder = IndexBuilder::new(config);
                    if let Err(err) = builder.build() {
                        eprintln!("{} {}", "error:".red().bold(), err);
                        std::process::exit(1);
                    }
                    println!("{}", "index built successfully".green().bold());
                } else {
                    eprintln!("{}", "aborted: index directory not created".red());
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("{} {}", "error:".red().bold(), err);
                std::process::exit(1);
            }
        },
    }
}

fn confirm_create_dir() -> bool {
    use std::io::Write as _;
    print!("create it now? [y/N] ");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
