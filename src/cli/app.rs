//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use depwarden::core::models::Language;
use depwarden::output::OutputMode;

/// depwarden - Dependency vulnerability practice checks
#[derive(Parser, Debug)]
#[command(
    name = "depwarden",
    version,
    about = "Dependency vulnerability practice checks",
    long_about = "Check JavaScript and TypeScript projects for known high-severity\n\
                  dependency vulnerabilities.\n\n\
                  depwarden finds the package manager that owns the project (npm or yarn),\n\
                  runs its audit in the project root and reports a verdict:\n\
                  practicing, not practicing, or unknown."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate all applicable practices against a project
    Scan {
        /// Project root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Source language (skips detection): javascript, typescript, rust, ...
        #[arg(short, long)]
        language: Option<Language>,

        /// Seconds before a running audit is killed (0 = no limit)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Run in CI mode (exit with status 1 when a practice is violated)
        #[arg(long)]
        ci: bool,
    },

    /// List registered practices
    Practices,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Scan {
            path,
            language,
            timeout,
            ci,
        }) => commands::scan(&path, language, timeout, ci, output_mode),
        Some(Command::Practices) => commands::practices(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": depwarden::VERSION
                    })
                );
            } else {
                println!("depwarden v{}", depwarden::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": depwarden::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("depwarden v{}", depwarden::VERSION);
                println!("\nRun 'depwarden --help' for usage");
                println!("Run 'depwarden scan' to check the current project");
            }
            Ok(())
        },
    }
}
