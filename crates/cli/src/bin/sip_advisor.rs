use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::{build_report, exit_code, init_tracing, render, Config, InvestableSummary};
use sip_engine::RecommendationStrategy;

/// SIP recommendations from a stored user profile.
/// The catalog defaults to the built-in seed schemes.
#[derive(Debug, Parser)]
#[command(
    name = "sip_advisor",
    author,
    version,
    about = "Recommend SIP investments for a user profile",
    long_about = None
)]
struct Args {
    /// Path to a scheme catalog JSON file (overrides SIP_CATALOG_PATH)
    #[arg(short = 'c', long = "catalog", global = true)]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short = 'p', long = "pretty", global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly amount available for recurring investment
    Investable {
        #[arg(long = "profile")]
        profile: PathBuf,
    },
    /// Match the catalog against the profile's investable band
    Suggest {
        #[arg(long = "profile")]
        profile: PathBuf,
    },
    /// Single flat SIP estimate, ignoring the catalog
    Estimate {
        #[arg(long = "profile")]
        profile: PathBuf,
    },
    /// Run the chosen strategy
    Recommend {
        #[arg(long = "profile")]
        profile: PathBuf,
        /// catalog | flat
        #[arg(short = 's', long = "strategy", default_value = "catalog")]
        strategy: RecommendationStrategy,
    },
    /// Print the active scheme catalog
    Schemes,
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = run(Args::parse()) {
        eprintln!("[ERROR] {:#}", err);
        process::exit(exit_code(&err));
    }
}

fn run(args: Args) -> Result<()> {
    let cfg = Config::resolve(args.catalog, args.pretty);

    let output = match args.command {
        Command::Investable { profile } => {
            let profile = catalog_loader::load_profile(&profile)?;
            render(&InvestableSummary::for_profile(&profile), cfg.pretty)?
        }
        Command::Suggest { profile } => {
            report_for(&cfg, &profile, RecommendationStrategy::CatalogMatch)?
        }
        Command::Estimate { profile } => {
            report_for(&cfg, &profile, RecommendationStrategy::FlatEstimate)?
        }
        Command::Recommend { profile, strategy } => report_for(&cfg, &profile, strategy)?,
        Command::Schemes => render(&cfg.load_catalog()?, cfg.pretty)?,
    };

    println!("{}", output);
    Ok(())
}

fn report_for(
    cfg: &Config,
    profile_path: &Path,
    strategy: RecommendationStrategy,
) -> Result<String> {
    let profile = catalog_loader::load_profile(profile_path)?;
    let schemes = match strategy {
        RecommendationStrategy::CatalogMatch => cfg.load_catalog()?,
        RecommendationStrategy::FlatEstimate => Vec::new(),
    };
    tracing::info!(%strategy, profile_type = %profile.profile_type(), "building recommendation");

    let report = build_report(&profile, &schemes, strategy)
        .with_context(|| format!("Recommending for {}", profile_path.display()))?;
    render(&report, cfg.pretty)
}
