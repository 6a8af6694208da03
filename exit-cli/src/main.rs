use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use exit_cli::comparison;
use exit_cli::presentation;
use exit_cli::settings::Settings;
use exit_cli::utils::{parse_amount, parse_percentage};
use exit_core::{Currency, ExitScenario, data};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compares after-tax proceeds of a startup exit under the US QSBS
/// exclusion and the Canadian Lifetime Capital Gains Exemption.
///
/// Amounts accept comma thousands separators. Currency, ownership and
/// jurisdiction selections default to the values used last run.
#[derive(Debug, Parser)]
#[command(name = "exit-calc", version)]
struct Cli {
    /// Total company exit value (e.g. `25,000,000`).
    exit_value: Option<String>,

    /// Total cost basis of the shares.
    #[arg(long, default_value = "0")]
    cost_basis: String,

    /// Shareholder's ownership percentage, 0-100.
    #[arg(long)]
    ownership: Option<String>,

    /// Currency the amounts are in (USD or CAD).
    #[arg(long)]
    currency: Option<String>,

    /// US state for the QSBS side.
    #[arg(long)]
    state: Option<String>,

    /// Canadian province or territory for the LCGE side.
    #[arg(long)]
    province: Option<String>,

    /// Also print the after-tax comparison across standard exit sizes.
    #[arg(long, default_value_t = false)]
    sweep: bool,

    /// List the recognized state and province codes and exit.
    #[arg(long, default_value_t = false)]
    list_jurisdictions: bool,

    /// Path of the settings file holding last-used selections.
    #[arg(long, default_value = "exit-calc.toml")]
    settings: PathBuf,

    /// Do not persist this run's selections.
    #[arg(long, default_value_t = false)]
    no_save: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.list_jurisdictions {
        print_jurisdictions();
        return Ok(());
    }

    let mut settings = Settings::load(&cli.settings);
    debug!(?settings, "loaded settings");

    // Flags override the remembered selections.
    if let Some(currency) = &cli.currency {
        settings.currency = Currency::parse(&currency.to_ascii_uppercase())
            .with_context(|| format!("unknown currency '{currency}' (expected USD or CAD)"))?;
    }
    if let Some(ownership) = &cli.ownership {
        settings.ownership_percentage = parse_percentage(ownership)?;
    }
    if let Some(state) = &cli.state {
        settings.state = state.to_ascii_uppercase();
    }
    if let Some(province) = &cli.province {
        settings.province = province.to_ascii_uppercase();
    }

    let exit_value = cli
        .exit_value
        .as_deref()
        .context("an exit value is required (see --help)")?;

    let scenario = ExitScenario {
        ownership_percentage: settings.ownership_percentage,
        exit_value: parse_amount(exit_value)?,
        cost_basis: parse_amount(&cli.cost_basis)?,
        currency: settings.currency,
    };

    let result = comparison::compare(&scenario, &settings.state, &settings.province)?;
    println!("{}", presentation::render_comparison(&result));

    if cli.sweep {
        let points = comparison::sweep(
            scenario.ownership_percentage,
            scenario.currency,
            &settings.state,
            &settings.province,
        )?;
        println!();
        print!("{}", presentation::render_sweep(&points, scenario.currency));
    }

    if !cli.no_save {
        settings.save(&cli.settings)?;
        debug!(path = %cli.settings.display(), "saved settings");
    }

    Ok(())
}

fn print_jurisdictions() {
    println!("US states:");
    for code in data::state_codes() {
        if let Some(state) = data::us_state(code) {
            println!("  {code}  {}", state.name);
        }
    }
    println!("Canadian provinces and territories:");
    for code in data::province_codes() {
        if let Some(province) = data::province(code) {
            println!("  {code}  {}", province.name);
        }
    }
}
