//! # msnpack CLI
//!
//! Command-line interface for the msnpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use msnpack::MsnpackError;
use msnpack::cli::Args;
use msnpack::convert::Converter;
use msnpack::core::FilterConfig;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), MsnpackError> {
    let start = Instant::now();

    println!("📦 msnpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("👤 Self:    {}", args.self_identifier);
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output.display());
    println!("🔤 Encoding: {}", args.msn_config().encoding);
    println!();

    let converter = Converter::new(args.msn_config())
        .with_filter(FilterConfig::new().with_skip_empty(!args.keep_empty))
        .with_chunking(args.chunk_config());

    let report = converter.convert_folder(&args.input, &args.output)?;

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✅ Done! {} of {} documents converted ({:.2}s)",
        report.converted.len(),
        report.documents_seen(),
        start.elapsed().as_secs_f64()
    );
    let totals = report.totals();
    println!(
        "   {} of {} messages kept ({:.1}% noise)",
        totals.retained,
        totals.parsed,
        totals.noise_ratio()
    );
    println!("   {} files written", report.files_written());
    if !report.failed.is_empty() {
        println!("⚠️  {} documents skipped:", report.failed.len());
        for (path, reason) in &report.failed {
            println!("   {}: {}", path.display(), reason);
        }
    }

    Ok(())
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("msnpack=info"),
        1 => EnvFilter::new("msnpack=debug"),
        _ => EnvFilter::new("msnpack=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();
}
