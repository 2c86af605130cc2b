//! Print the coach payload JSON to stdout.
//!
//! With no arguments the project root is located by searching upward for
//! `prompts/system_prompt.md`.
//!
//! # Examples
//!
//! ```sh
//! assemble-payload > payload.json
//! assemble-payload --root ../microbit-coach -vv
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use coach_payload::{Payload, PayloadSources, resolve_root};
use tracing::Level;

/// Print the coach payload JSON to stdout.
#[derive(Parser)]
#[command(name = "assemble-payload")]
struct Cli {
    /// Project root containing `prompts/` and `tools/`
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli) -> Result<String, String> {
    let sources = PayloadSources::default();
    let root = resolve_root(cli.root.as_deref(), &sources)?;
    let payload = Payload::assemble(&root, &sources)?;
    payload.render()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
