#![warn(clippy::uninlined_format_args)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fairshare_application::Ledger;
use fairshare_presentation::{share_url, ReportPresenter, SummaryPresenter};

/// FairShare - split group expenses and settle up
#[derive(Parser)]
#[command(name = "fairshare", version, about, long_about = None)]
struct Cli {
    /// Path to the ledger JSON file
    #[arg(long, default_value = "ledger.json")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show balances and the settlement plan
    Settle {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Also print a WhatsApp share link for the summary
        #[arg(long)]
        share: bool,
    },

    /// Show spending totals by category with payer insights
    Report {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let ledger = load_ledger(&cli.ledger)?;

    match cli.command {
        Commands::Settle { json, share } => settle(&ledger, json, share),
        Commands::Report { json } => report(&ledger, json),
    }
}

fn load_ledger(path: &Path) -> Result<Ledger> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read ledger file {}", path.display()))?;
    let ledger: Ledger = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid ledger file", path.display()))?;
    Ok(ledger)
}

fn settle(ledger: &Ledger, json: bool, share: bool) -> Result<()> {
    let summary = ledger.settlement_summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{}",
        SummaryPresenter::balance_table(&summary.balances, ledger)
    );
    println!();

    let text = SummaryPresenter::shareable_text(&summary.settlements, ledger.expenses(), ledger);
    println!("{text}");

    if share {
        println!();
        println!("{}", share_url(&text));
    }

    Ok(())
}

fn report(ledger: &Ledger, json: bool) -> Result<()> {
    let report = ledger.spending_report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", ReportPresenter::render(&report, ledger));

    Ok(())
}
