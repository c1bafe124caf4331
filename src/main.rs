//! league-setup main entry point
//!
//! This is the command-line interface for inspecting and editing a league's
//! matchup schedule through its setup page.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use league_setup::config::load_config;
use league_setup::output::{format_period, format_period_change, format_setup_summary};
use league_setup::{serialize, MatchupPair, SetupClient};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// league-setup: edit a fantasy league's matchup schedule
///
/// Reads the league setup page, replaces one period's matchups and submits
/// the complete configuration back.
#[derive(Parser, Debug)]
#[command(name = "league-setup")]
#[command(version)]
#[command(about = "Inspect and edit a league's matchup schedule", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show teams, divisions and the schedule
    Show {
        /// Also list the matchups of this period
        #[arg(long)]
        period: Option<u32>,
    },

    /// Replace one period's matchups
    SetPeriod {
        /// Period to edit; must already exist
        #[arg(long)]
        period: u32,

        /// Matchup as AWAY_HOME; use -1 as HOME for a bye (repeatable)
        #[arg(long = "pair", value_name = "AWAY_HOME", required = true)]
        pairs: Vec<MatchupPair>,

        /// Show the change and payload fingerprint without submitting
        #[arg(long)]
        dry_run: bool,

        /// Re-fetch after submitting and check the period took the new matchups
        #[arg(long, conflicts_with = "dry_run")]
        verify: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let client = SetupClient::from_config(&config)?;

    match cli.command {
        Command::Show { period } => handle_show(&client, period).await,
        Command::SetPeriod {
            period,
            pairs,
            dry_run,
            verify,
        } => handle_set_period(&client, period, pairs, dry_run, verify).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("league_setup=info,warn"),
            1 => EnvFilter::new("league_setup=debug,info"),
            2 => EnvFilter::new("league_setup=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles `show`: prints the setup overview and optionally one period
async fn handle_show(client: &SetupClient, period: Option<u32>) -> anyhow::Result<()> {
    let snapshot = client.fetch_snapshot().await?;
    print!("{}", format_setup_summary(&snapshot));

    if let Some(period) = period {
        let Some(pairs) = snapshot.period(period) else {
            bail!("period {} does not exist", period);
        };
        println!();
        print!("{}", format_period(&snapshot, period, pairs));
    }

    Ok(())
}

/// Handles `set-period`: edits one period and submits unless dry-running
async fn handle_set_period(
    client: &SetupClient,
    period: u32,
    pairs: Vec<MatchupPair>,
    dry_run: bool,
    verify: bool,
) -> anyhow::Result<()> {
    let snapshot = client.fetch_snapshot().await?;
    let edited = snapshot.with_period_matchups(period, pairs.clone())?;

    let before = snapshot.period(period).unwrap_or_default();
    print!("{}", format_period_change(&snapshot, period, before, &pairs));

    let changed = snapshot.schedule().changed_periods(edited.schedule());
    println!(
        "\nSummary: {} period(s) changed, {} unchanged",
        changed.len(),
        snapshot.schedule().len() - changed.len()
    );

    let payload = serialize(&edited, period);
    println!("Payload fingerprint: {}", payload.fingerprint());

    if dry_run {
        println!("\nDry run complete. Run without --dry-run to submit.");
        return Ok(());
    }

    if changed.is_empty() {
        println!("Nothing to submit.");
        return Ok(());
    }

    client.submit(&payload).await?;
    println!("✓ Period {} submitted", period);

    if verify {
        client.verify_period(period, &pairs).await?;
        println!("✓ Period {} verified against a fresh fetch", period);
    }

    Ok(())
}
