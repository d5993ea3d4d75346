mod display;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use display::output::{
    build_json, display_build, display_champions, display_collection_summary, display_error,
    display_info, display_items, display_success, display_tier_list, display_warning,
};
use indicatif::{ProgressBar, ProgressStyle};
use league_builds::analysis::build::{AggregatedBuild, Role};
use league_builds::api::client::RiotApiClient;
use league_builds::api::ddragon::DataDragonClient;
use league_builds::api::endpoints::Region;
use league_builds::api::tierlist::TierListClient;
use league_builds::api::ReferenceSource;
use league_builds::cache::BuildCache;
use league_builds::collector::{
    BuildCollector, BuildRequest, CollectionOutcome, ScanOutcome, DEFAULT_MAX_MATCHES,
};
use league_builds::config::Config;
use league_builds::defaults::default_build;
use league_builds::error::AppError;
use league_builds::reference::directory::{ChampionDirectory, FALLBACK_VERSION};
use league_builds::reference::items::{item_catalog, StatTag};
use league_builds::reference::tierlist::fetch_tier_list;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "League Builds")]
#[command(about = "Recommended builds from high-tier ranked matches", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommended items, runes and skill order for a champion in a role
    Build {
        /// Champion name, e.g. "Aatrox" or "kai'sa"
        champion: String,

        /// top, jungle, mid, adc or support
        role: Role,

        /// Platform region (default: RIOT_REGION or euw1)
        #[arg(short, long)]
        region: Option<Region>,

        /// Stop after this many matching games
        #[arg(short, long, default_value_t = DEFAULT_MAX_MATCHES)]
        matches: usize,

        /// Ignore the cached build and collect again
        #[arg(long)]
        refresh: bool,

        /// Print JSON with names and icon URLs instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List champions from the current patch
    Champions,

    /// List purchasable items, optionally filtered by stat
    Items {
        /// ad, ap, health, armor, mr, as or crit
        #[arg(short, long)]
        stat: Option<StatTag>,
    },

    /// Champion tier list from Diamond+ games
    Tierlist {
        /// Only rank champions in this role
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Drop the cached build for a champion and role
    Forget { champion: String, role: Role },
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("LEAGUE_BUILDS_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match args.command {
        Command::Build {
            champion,
            role,
            region,
            matches,
            refresh,
            json,
        } => {
            if let Some(region) = region {
                config.region = region;
            }
            let request = BuildRequest::new(champion, role, config.region.clone())
                .with_max_matches(matches)
                .with_force_refresh(refresh);
            run_build(&config, &request, json)
        }
        Command::Champions => {
            let ddragon = DataDragonClient::new(config.http_timeout);
            let directory = ChampionDirectory::load(&ddragon).context("could not load champions")?;
            display_champions(directory.champions(), directory.version());
            Ok(())
        }
        Command::Items { stat } => {
            let ddragon = DataDragonClient::new(config.http_timeout);
            let version = latest_version(&ddragon);
            let items = ddragon.items(&version).context("could not load items")?;
            let catalog: Vec<_> = item_catalog(&version, &items)
                .into_iter()
                .filter(|item| stat.map_or(true, |tag| item.stat_tags.contains(&tag)))
                .collect();
            display_items(&catalog);
            Ok(())
        }
        Command::Tierlist { role } => {
            let ddragon = DataDragonClient::new(config.http_timeout);
            let version = latest_version(&ddragon);
            let source = TierListClient::new(config.tier_list_base.as_str(), config.http_timeout);
            let list = fetch_tier_list(&source, role, &version);
            display_tier_list(&list, role);
            Ok(())
        }
        Command::Forget { champion, role } => {
            let cache = BuildCache::new(&config.cache_dir);
            cache.invalidate(&champion, role)?;
            display_success(&format!(
                "Cleared cached {} {} build from {}",
                champion,
                role,
                cache.dir().display()
            ));
            Ok(())
        }
    }
}

fn run_build(config: &Config, request: &BuildRequest, json: bool) -> anyhow::Result<()> {
    let client = RiotApiClient::new(config);
    let ddragon = DataDragonClient::new(config.http_timeout);
    let cache = BuildCache::new(&config.cache_dir);
    let mut collector = BuildCollector::new(client, ddragon, cache);

    if !json {
        display_info(&format!(
            "Collecting {} {} builds in {}",
            request.champion, request.role, request.region
        ));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(120));
    let (mut collected, mut skipped) = (0, 0);

    let (build, report) = collector.collect_with_report(request, |step| {
        match step {
            ScanOutcome::Collected { .. } => collected += 1,
            ScanOutcome::Skipped { .. } => skipped += 1,
        }
        spinner.set_message(format!("{} builds collected, {} skipped", collected, skipped));
    });
    spinner.finish_and_clear();

    let build: AggregatedBuild = match (report.outcome, build) {
        (_, Some(build)) => {
            match report.outcome {
                CollectionOutcome::CacheHit if !json => display_success("⚡ Loaded from cache"),
                CollectionOutcome::Collected if !json => {
                    display_collection_summary(&report, collector.riot().requests_made())
                }
                _ => {}
            }
            build
        }
        (CollectionOutcome::NotConfigured, None) => {
            display_warning("RIOT_API_KEY is not set, falling back to the built-in default build");
            default_build(&request.champion, request.role).ok_or(AppError::MissingApiKey)?
        }
        (CollectionOutcome::ReferenceUnavailable, None) => bail!(
            "could not reach Data Dragon to look up {}, try again later",
            request.champion
        ),
        (CollectionOutcome::ChampionNotFound, None) => {
            return Err(AppError::ChampionNotFound(request.champion.clone()).into());
        }
        (_, None) => bail!(
            "no {} {} games found in recent high-tier matches",
            request.champion,
            request.role
        ),
    };

    // A cache hit or a missing key never loads the directory.
    let version = if collector.directory().is_empty() {
        latest_version(collector.reference())
    } else {
        collector.directory().version().to_string()
    };
    let item_names = item_names(collector.reference(), &version);

    if json {
        println!("{}", build_json(&request.champion, request.role, &version, &build, &item_names)?);
    } else {
        display_build(&request.champion, request.role, &build, &item_names);
    }
    Ok(())
}

fn latest_version(reference: &impl ReferenceSource) -> String {
    reference.latest_version().unwrap_or_else(|e| {
        warn!(error = %e, fallback = FALLBACK_VERSION, "could not fetch latest patch version");
        FALLBACK_VERSION.to_string()
    })
}

/// Item display names; empty when Data Dragon is unreachable.
fn item_names(reference: &impl ReferenceSource, version: &str) -> HashMap<u32, String> {
    match reference.items(version) {
        Ok(items) => item_catalog(version, &items)
            .into_iter()
            .map(|item| (item.id, item.name))
            .collect(),
        Err(e) => {
            warn!(error = %e, "could not load item names");
            HashMap::new()
        }
    }
}
