//! Build collection: cache lookup, high-tier match sampling, extraction and aggregation.
//!
//! The scan is sequential. Each player and match that cannot be read is recorded as a
//! [`ScanOutcome::Skipped`] and the scan moves on; nothing here aborts a run early
//! except a missing API key, an unknown champion or an unreachable champion list.

use crate::analysis::aggregator::BuildAggregator;
use crate::analysis::build::{AggregatedBuild, NormalizedBuild, Role};
use crate::analysis::extractor::{extract_build, extract_starting_items};
use crate::api::endpoints::{LadderTier, Region, RANKED_SOLO_QUEUE, RANKED_SOLO_QUEUE_ID};
use crate::api::models::LeagueItemDto;
use crate::api::{ReferenceSource, RiotSource};
use crate::cache::BuildCache;
use crate::error::Result;
use crate::reference::directory::ChampionDirectory;
use std::fmt;
use tracing::{debug, error, info, warn};

pub const HIGH_TIERS: [LadderTier; 2] = [LadderTier::Challenger, LadderTier::Grandmaster];
/// Entries taken from the top of each ladder.
pub const LADDER_SAMPLE: usize = 50;
/// Players scanned per run, across all ladders.
pub const MAX_PLAYERS: usize = 20;
pub const MATCHES_PER_PLAYER: usize = 5;
pub const DEFAULT_MAX_MATCHES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub champion: String,
    pub role: Role,
    pub region: Region,
    /// Stop once this many builds have been collected.
    pub max_matches: usize,
    /// Skip the cache lookup. A successful run still writes the cache.
    pub force_refresh: bool,
}

impl BuildRequest {
    pub fn new(champion: impl Into<String>, role: Role, region: Region) -> Self {
        BuildRequest {
            champion: champion.into(),
            role,
            region,
            max_matches: DEFAULT_MAX_MATCHES,
            force_refresh: false,
        }
    }

    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    pub fn with_force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PuuidUnresolved,
    MatchIdsUnavailable,
    MatchUnavailable,
    NoMatchingParticipant,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::PuuidUnresolved => "player could not be resolved",
            SkipReason::MatchIdsUnavailable => "match history unavailable",
            SkipReason::MatchUnavailable => "match details unavailable",
            SkipReason::NoMatchingParticipant => "champion not played in that role",
        };
        f.write_str(reason)
    }
}

/// What happened to one player or match during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Collected { match_id: String, with_timeline: bool },
    Skipped { target: String, reason: SkipReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOutcome {
    CacheHit,
    Collected,
    NotConfigured,
    /// The champion list could not be fetched, so the name was never checked.
    ReferenceUnavailable,
    ChampionNotFound,
    NoBuilds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub outcome: CollectionOutcome,
    pub players_scanned: usize,
    pub steps: Vec<ScanOutcome>,
}

impl CollectionReport {
    fn new(outcome: CollectionOutcome) -> Self {
        CollectionReport {
            outcome,
            players_scanned: 0,
            steps: Vec::new(),
        }
    }

    pub fn collected(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, ScanOutcome::Collected { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.steps.len() - self.collected()
    }
}

pub struct BuildCollector<S, R> {
    riot: S,
    reference: R,
    directory: ChampionDirectory,
    cache: BuildCache,
}

impl<S: RiotSource, R: ReferenceSource> BuildCollector<S, R> {
    pub fn new(riot: S, reference: R, cache: BuildCache) -> Self {
        BuildCollector {
            riot,
            reference,
            directory: ChampionDirectory::empty(),
            cache,
        }
    }

    /// Start from an already loaded directory instead of fetching one on first use.
    pub fn with_directory(mut self, directory: ChampionDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn directory(&self) -> &ChampionDirectory {
        &self.directory
    }

    pub fn riot(&self) -> &S {
        &self.riot
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn cache(&self) -> &BuildCache {
        &self.cache
    }

    pub fn refresh_directory(&mut self) -> Result<()> {
        self.directory.refresh(&self.reference)
    }

    pub fn collect_build(&mut self, request: &BuildRequest) -> Option<AggregatedBuild> {
        self.collect_with_report(request, |_| {}).0
    }

    /// Run a collection, calling `on_step` for every player or match scanned.
    pub fn collect_with_report(
        &mut self,
        request: &BuildRequest,
        mut on_step: impl FnMut(&ScanOutcome),
    ) -> (Option<AggregatedBuild>, CollectionReport) {
        let champion = request.champion.as_str();
        let role = request.role;

        if !self.riot.is_configured() {
            warn!(champion, %role, "no Riot API key configured, cannot collect builds");
            return (None, CollectionReport::new(CollectionOutcome::NotConfigured));
        }

        if !request.force_refresh {
            if let Some(cached) = self.cache.load(champion, role) {
                info!(champion, %role, sample_size = cached.sample_size, "build loaded from cache");
                return (Some(cached), CollectionReport::new(CollectionOutcome::CacheHit));
            }
        }

        let champion_key = match self.resolve_champion(champion) {
            Ok(Some(key)) => key,
            Ok(None) => {
                warn!(champion, "champion not found");
                return (None, CollectionReport::new(CollectionOutcome::ChampionNotFound));
            }
            Err(e) => {
                warn!(champion, error = %e, "could not load champion directory");
                return (None, CollectionReport::new(CollectionOutcome::ReferenceUnavailable));
            }
        };

        let players = self.high_tier_players(&request.region);
        info!(champion, %role, players = players.len(), "scanning high-tier matches");

        let mut report = CollectionReport::new(CollectionOutcome::NoBuilds);
        let mut builds: Vec<NormalizedBuild> = Vec::new();
        let mut record = |report: &mut CollectionReport, outcome: ScanOutcome| {
            on_step(&outcome);
            report.steps.push(outcome);
        };

        'players: for player in &players {
            if builds.len() >= request.max_matches {
                break;
            }
            report.players_scanned += 1;

            let puuid = match self.riot.resolve_puuid(player, &request.region) {
                Ok(Some(puuid)) => puuid,
                Ok(None) => {
                    record(&mut report, skipped(player_label(player), SkipReason::PuuidUnresolved));
                    continue;
                }
                Err(e) => {
                    warn!(player = %player_label(player), error = %e, "could not resolve player");
                    record(&mut report, skipped(player_label(player), SkipReason::PuuidUnresolved));
                    continue;
                }
            };

            let match_ids = match self.riot.recent_match_ids(
                &puuid,
                &request.region,
                RANKED_SOLO_QUEUE_ID,
                MATCHES_PER_PLAYER,
            ) {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(puuid = %puuid, error = %e, "could not list recent matches");
                    record(&mut report, skipped(puuid, SkipReason::MatchIdsUnavailable));
                    continue;
                }
            };

            for match_id in match_ids {
                if builds.len() >= request.max_matches {
                    break 'players;
                }

                match self.scan_match(&match_id, champion_key, role, &request.region) {
                    Ok((build, with_timeline)) => {
                        builds.push(build);
                        info!(match_id = %match_id, found = builds.len(), wanted = request.max_matches, "build collected");
                        record(&mut report, ScanOutcome::Collected { match_id, with_timeline });
                    }
                    Err(reason) => record(&mut report, skipped(match_id, reason)),
                }
            }
        }

        let Some(aggregated) = BuildAggregator::aggregate(&builds) else {
            warn!(champion, %role, "no matching builds found");
            return (None, report);
        };

        if let Err(e) = self.cache.save(champion, role, &aggregated) {
            error!(champion, %role, error = %e, "could not write build cache");
        }
        report.outcome = CollectionOutcome::Collected;
        (Some(aggregated), report)
    }

    fn resolve_champion(&mut self, champion: &str) -> Result<Option<u32>> {
        if self.directory.is_empty() {
            self.refresh_directory()?;
        }
        Ok(self.directory.resolve(champion))
    }

    fn high_tier_players(&self, region: &Region) -> Vec<LeagueItemDto> {
        let mut players = Vec::new();
        for tier in HIGH_TIERS {
            match self.riot.tier_players(region, tier, RANKED_SOLO_QUEUE) {
                Ok(entries) => players.extend(entries.into_iter().take(LADDER_SAMPLE)),
                Err(e) => warn!(%tier, error = %e, "could not fetch ladder"),
            }
        }
        players.truncate(MAX_PLAYERS);
        players
    }

    /// The target champion's build from one match, and whether timeline data went into it.
    fn scan_match(
        &self,
        match_id: &str,
        champion_key: u32,
        role: Role,
        region: &Region,
    ) -> std::result::Result<(NormalizedBuild, bool), SkipReason> {
        let match_data = self.riot.match_details(match_id, region).map_err(|e| {
            warn!(match_id, error = %e, "could not fetch match");
            SkipReason::MatchUnavailable
        })?;

        let participant = match_data
            .info
            .participants
            .iter()
            .find(|p| p.champion_id == champion_key && p.team_position == role.team_position())
            .ok_or(SkipReason::NoMatchingParticipant)?;

        let timeline = match self.riot.match_timeline(match_id, region) {
            Ok(timeline) => Some(timeline),
            Err(e) => {
                warn!(match_id, error = %e, "timeline unavailable, keeping final-state build only");
                None
            }
        };

        let participant_id = participant.participant_id;
        let mut build = extract_build(participant, timeline.as_ref(), participant_id);
        if let (Some(timeline), Some(participant_id)) = (&timeline, participant_id) {
            build.starting_items = extract_starting_items(timeline, participant_id);
        }
        debug!(match_id, starting = build.starting_items.len(), "match scanned");

        Ok((build, timeline.is_some()))
    }
}

fn skipped(target: impl Into<String>, reason: SkipReason) -> ScanOutcome {
    ScanOutcome::Skipped {
        target: target.into(),
        reason,
    }
}

fn player_label(player: &LeagueItemDto) -> String {
    player
        .summoner_id
        .clone()
        .or_else(|| player.puuid.clone())
        .unwrap_or_else(|| "unknown player".to_string())
}
