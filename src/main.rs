use std::io::{self, Write};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// mathbind calls four exported arithmetic functions and prints their
/// results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the exported functions and their docstrings instead of running
    /// the demo.
    #[arg(short, long)]
    list: bool,

    /// Log every call to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn list_exports() -> mathbind::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in mathbind::export_listing() {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "starting");

    let outcome = if args.list {
        list_exports()
    } else {
        mathbind::demo::run(&mut io::stdout().lock())
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
