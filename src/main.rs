use clap::Parser;
use console::style;
use std::process;

use rdd::cli::Args;
use rdd::{create_formatter, load_records, reconcile};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", style("*** ERROR ***").red().bold());
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Parse and validate command-line arguments
    let args = Args::parse();
    args.validate()?;

    let key_columns = args.key_columns();
    let ignored_columns = args.ignored_columns();

    // Load and parse both record sets
    let source = load_records(&args.source)
        .map_err(|e| format!("Failed to load {}: {}", args.source.display(), e))?;
    let target = load_records(&args.target)
        .map_err(|e| format!("Failed to load {}: {}", args.target.display(), e))?;

    // Reconcile
    let entries = reconcile(&key_columns, &source, &target, &ignored_columns)?;

    // Format and output results
    let formatter = create_formatter(args.format);
    let output = formatter.format(&entries)?;

    print!("{}", output);

    Ok(())
}
