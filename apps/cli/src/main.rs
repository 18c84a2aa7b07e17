use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use slnfolders_solution::{
    restructure, RestructureOptions, RestructureReport, DEFAULT_SOLUTION_FILE,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "slnfolders",
    about = "Regroups solution folders to match the libs/ directory layout",
    author,
    version
)]
struct Cli {
    /// 要重整的方案檔。 / Solution file to restructure.
    #[arg(value_name = "SOLUTION", default_value = DEFAULT_SOLUTION_FILE)]
    solution: PathBuf,

    /// 僅顯示分類結果，不寫入任何檔案。 / Report the classification without writing the backup or the solution.
    #[arg(long)]
    dry_run: bool,

    /// 增加日誌詳細程度（-v、-vv、-vvv）。 / Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    println!("=== Solution Folder Restructurer ===\n");

    let options = RestructureOptions {
        dry_run: cli.dry_run,
    };
    tracing::debug!(
        solution = %cli.solution.display(),
        dry_run = options.dry_run,
        "starting restructure"
    );
    let report = restructure(&cli.solution, &options)
        .with_context(|| format!("restructure {}", cli.solution.display()))?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &RestructureReport) {
    println!("Solution: {}", report.solution.display());
    if let Some(backup) = &report.backup {
        println!("Backup created: {}", backup.display());
    }
    println!(
        "Found {} projects and {} old folders",
        report.parsed.projects.len(),
        report.parsed.folders.len()
    );
    if report.written {
        println!("Solution file updated successfully!");
    } else {
        println!("Dry run only; re-run without --dry-run to write changes.");
    }
    println!();
    println!("{}", report.summary);
}
