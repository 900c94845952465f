#[macro_use]
extern crate log;

use std::io::Write as _;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use stravago::{
    DEFAULT_API_BASE, StravaApiClient, StravaConfig, StravaGo,
    types::{stats::StatsCategory, volumes::GapPolicy},
};

#[derive(Parser)]
pub struct StravaGoCli {
    #[arg(env, long, hide_env_values = true)]
    pub strava_access_token: String,
    #[arg(env, long)]
    pub strava_athlete_id: u64,
    #[arg(env, long, default_value = DEFAULT_API_BASE)]
    pub strava_api_base: String,
    #[clap(subcommand)]
    pub subcommand: StravaGoCommand,
}

#[derive(Subcommand)]
pub enum StravaGoCommand {
    ///
    /// Print the raw athlete stats document
    ///
    Stats,
    ///
    /// Print all time running totals
    ///
    RunningStats,
    ///
    /// Print a single totals subtree, e.g. `ytd_ride_totals`
    ///
    CategoryStats { category: StatsCategory },
    ///
    /// Print the raw list of recent activities
    ///
    Activities,
    ///
    /// Print distance per Monday anchored week, newest first
    ///
    WeeklyVolumes {
        /// Emit zero volume weeks for gaps longer than a week
        #[arg(long)]
        fill_empty_weeks: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = dotenv_result {
        debug!("no .env loaded: {}", error);
    }

    let cli = StravaGoCli::parse();
    let strava = StravaGo::new(StravaApiClient::new(StravaConfig {
        base_url: cli.strava_api_base,
        athlete_id: cli.strava_athlete_id,
        access_token: cli.strava_access_token,
    }));

    match cli.subcommand {
        StravaGoCommand::Stats => {
            let stats = strava
                .athlete_stats()
                .await
                .context("failed to fetch athlete stats")?;
            println!("{}", stats);
        }
        StravaGoCommand::RunningStats => {
            let totals = strava
                .athlete_running_stats()
                .await
                .context("failed to get running stats")?;
            print_bytes(&totals)?;
        }
        StravaGoCommand::CategoryStats { category } => {
            let totals = strava
                .athlete_category_stats(category)
                .await
                .with_context(|| format!("failed to get {category}"))?;
            print_bytes(&totals)?;
        }
        StravaGoCommand::Activities => {
            let activities = strava
                .athlete_activities()
                .await
                .context("failed to fetch activities")?;
            println!("{}", activities);
        }
        StravaGoCommand::WeeklyVolumes { fill_empty_weeks } => {
            let policy = if fill_empty_weeks {
                GapPolicy::FillEmptyWeeks
            } else {
                GapPolicy::Compat
            };
            let volumes = strava
                .weekly_volumes(policy)
                .await
                .context("failed to compute weekly volumes")?;
            println!("{}", volumes);
        }
    }

    Ok(())
}

fn print_bytes(bytes: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    writeln!(stdout)?;
    Ok(())
}
