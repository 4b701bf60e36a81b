//! Synthetic career sampling.
//!
//! [`CareerSampler`] drafts a batch of prospects, develops each of them for
//! a fixed number of seasons and keeps the per-season snapshots. The
//! reductions in this module turn those traces into the calibration views
//! used when tuning age curves:
//!
//! - [`max_rating_dists`] - distribution of career peaks and the ages at
//!   which they were reached
//! - [`season_rating_dists`] - quartiles of every rating, season by season
//! - [`average_career_arc`] - mean rating at the start of every season
//!
//! # Parallelization
//!
//! Careers are split into contiguous chunks, one per worker thread. Every
//! career owns a generator seeded from a master stream in career order, so
//! the traces are identical for any number of threads.

use std::{
    iter,
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use hoopdev_engine::{
    DevelopmentEngine, DevelopmentSeed, MAX_RATING, Prospect, ProspectSource, RatingKey,
    RatingProfile,
};
use hoopdev_stats::{descriptive::DescriptiveStats, percentiles::FiveNumberSummary};
use rand::Rng as _;
use serde::Serialize;

pub const DEFAULT_NUM_SEASONS: u32 = 20;

/// Parameters of one sampling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Number of careers to simulate.
    pub num_players: usize,
    /// Seasons simulated per career.
    pub num_seasons: u32,
    /// Coaching rank used for every season; `None` uses the league average.
    pub coaching_rank: Option<f64>,
    pub seed: DevelopmentSeed,
    /// Worker threads; `0` uses the available parallelism.
    pub threads: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            num_players: 100,
            num_seasons: DEFAULT_NUM_SEASONS,
            coaching_rank: None,
            seed: DevelopmentSeed::from_u64(0),
            threads: 0,
        }
    }
}

/// Ratings of a player right after one simulated season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSnapshot {
    /// Age after the season, i.e. once the player has aged by one year.
    pub age: u32,
    pub ratings: RatingProfile,
}

/// One synthetic career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerTrace {
    pub seed: DevelopmentSeed,
    pub prospect: Prospect,
    pub seasons: Vec<SeasonSnapshot>,
}

impl CareerTrace {
    /// Ratings at the start of every season, beginning with the draft profile.
    pub fn season_starts(&self) -> impl Iterator<Item = &RatingProfile> + '_ {
        iter::once(&self.prospect.ratings)
            .chain(self.seasons.iter().map(|s| &s.ratings))
            .take(self.seasons.len())
    }

    /// Career maximum of `key` and the age at which it was first reached.
    ///
    /// The draft profile counts, at the draft age.
    #[must_use]
    pub fn peak(&self, key: RatingKey) -> (u8, u32) {
        let mut peak = (self.prospect.ratings[key], self.prospect.age);
        for season in &self.seasons {
            if season.ratings[key] > peak.0 {
                peak = (season.ratings[key], season.age);
            }
        }
        peak
    }
}

/// Runs batches of synthetic careers through a [`DevelopmentEngine`].
///
/// # Example
///
/// ```
/// use hoopdev_analysis::career::{self, CareerSampler, SamplerConfig};
/// use hoopdev_engine::{DevelopmentEngine, DevelopmentSeed, LeagueContext, RandomProspectSource};
///
/// let config = SamplerConfig {
///     num_players: 8,
///     num_seasons: 5,
///     seed: DevelopmentSeed::from_u64(1),
///     ..SamplerConfig::default()
/// };
/// let sampler = CareerSampler::new(
///     DevelopmentEngine::new(LeagueContext::default()),
///     config,
///     RandomProspectSource::default(),
/// );
/// let traces = sampler.sample_traces();
/// assert_eq!(traces.len(), 8);
///
/// let dists = career::season_rating_dists(&traces);
/// assert!(dists.iter().all(|d| d.seasons.len() == 5));
/// ```
#[derive(Debug, Clone)]
pub struct CareerSampler<S> {
    engine: DevelopmentEngine,
    config: SamplerConfig,
    source: S,
}

impl<S> CareerSampler<S>
where
    S: ProspectSource,
{
    pub fn new(engine: DevelopmentEngine, config: SamplerConfig, source: S) -> Self {
        Self {
            engine,
            config,
            source,
        }
    }

    /// Simulates `num_players` careers, returned in career order.
    pub fn sample_traces(&self) -> Vec<CareerTrace> {
        let num_players = self.config.num_players;
        let mut master = self.config.seed.rng();
        let seeds = (0..num_players)
            .map(|_| master.random::<DevelopmentSeed>())
            .collect::<Vec<_>>();

        let threads = self.worker_count().clamp(1, num_players.max(1));
        let chunk_size = num_players.div_ceil(threads).max(1);
        log::debug!(
            "sampling {num_players} careers of {} seasons on {threads} threads ({} teams)",
            self.config.num_seasons,
            self.engine.context().num_active_teams
        );

        let progress = Progress::new(num_players);
        let mut slots = iter::repeat_with(|| None)
            .take(num_players)
            .collect::<Vec<Option<CareerTrace>>>();
        thread::scope(|s| {
            for (slots, seeds) in slots.chunks_mut(chunk_size).zip(seeds.chunks(chunk_size)) {
                let progress = &progress;
                s.spawn(move || {
                    for (slot, seed) in slots.iter_mut().zip(seeds) {
                        *slot = Some(self.run_career(*seed));
                        progress.tick();
                    }
                });
            }
        });

        slots.into_iter().flatten().collect()
    }

    /// Simulates the career driven by `seed`.
    #[must_use]
    pub fn run_career(&self, seed: DevelopmentSeed) -> CareerTrace {
        let mut rng = seed.rng();
        let prospect = self.source.generate(&mut rng);

        let mut ratings = prospect.ratings;
        let mut age = prospect.age;
        let seasons = (0..self.config.num_seasons)
            .map(|_| {
                self.engine
                    .develop_season(&mut ratings, age, self.config.coaching_rank, &mut rng);
                age = age.saturating_add(1);
                SeasonSnapshot { age, ratings }
            })
            .collect();

        CareerTrace {
            seed,
            prospect,
            seasons,
        }
    }

    fn worker_count(&self) -> usize {
        if self.config.threads == 0 {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        } else {
            self.config.threads
        }
    }
}

/// Logs completion every 5% of a run.
struct Progress {
    done: AtomicUsize,
    total: usize,
    step: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            done: AtomicUsize::new(0),
            total,
            step: (total / 20).max(1),
        }
    }

    fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.step == 0 || done == self.total {
            log::info!("{}% ({done}/{} careers)", 100 * done / self.total, self.total);
        }
    }
}

/// Distribution of career peaks for one rating.
#[derive(Debug, Clone, Serialize)]
pub struct MaxRatingDist {
    pub key: RatingKey,
    pub max_ratings: FiveNumberSummary<u8>,
    pub ages: FiveNumberSummary<u32>,
    /// Careers that peaked at the maximum rating.
    pub num_100s: usize,
}

/// Five-number summaries of every rating's career maximum and of the age at
/// which it was reached.
///
/// Returns an empty list when `traces` is empty.
#[must_use]
pub fn max_rating_dists(traces: &[CareerTrace]) -> Vec<MaxRatingDist> {
    RatingKey::ALL
        .into_iter()
        .filter_map(|key| {
            let (maxima, ages): (Vec<u8>, Vec<u32>) =
                traces.iter().map(|t| t.peak(key)).unzip();
            let num_100s = maxima.iter().filter(|&&v| v == MAX_RATING).count();
            Some(MaxRatingDist {
                key,
                max_ratings: FiveNumberSummary::new(maxima)?,
                ages: FiveNumberSummary::new(ages)?,
                num_100s,
            })
        })
        .collect()
}

/// Quartiles of one rating in one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonQuartiles {
    pub q1: u8,
    pub median: u8,
    pub q3: u8,
}

/// Career arc of the q1 / median / q3 player for one rating.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonRatingDist {
    pub key: RatingKey,
    pub seasons: Vec<SeasonQuartiles>,
}

/// Per-season quartiles of every rating, measured after each season.
#[must_use]
pub fn season_rating_dists(traces: &[CareerTrace]) -> Vec<SeasonRatingDist> {
    let num_seasons = common_season_count(traces);
    RatingKey::ALL
        .into_iter()
        .map(|key| {
            let seasons = (0..num_seasons)
                .filter_map(|j| {
                    let summary =
                        FiveNumberSummary::new(traces.iter().map(|t| t.seasons[j].ratings[key]))?;
                    Some(SeasonQuartiles {
                        q1: summary.q1,
                        median: summary.median,
                        q3: summary.q3,
                    })
                })
                .collect();
            SeasonRatingDist { key, seasons }
        })
        .collect()
}

/// Mean of one rating at the start of every season.
#[derive(Debug, Clone, Serialize)]
pub struct CareerArc {
    pub key: RatingKey,
    pub means: Vec<f64>,
}

/// Average career arc of every rating.
///
/// Means are taken before each season's development, so the first entry is
/// the mean of the draft profiles.
#[must_use]
pub fn average_career_arc(traces: &[CareerTrace]) -> Vec<CareerArc> {
    let num_seasons = common_season_count(traces);
    RatingKey::ALL
        .into_iter()
        .map(|key| {
            let means = (0..num_seasons)
                .filter_map(|k| {
                    let values = traces
                        .iter()
                        .filter_map(|t| t.season_starts().nth(k))
                        .map(|r| f64::from(r[key]));
                    DescriptiveStats::new(values).map(|s| s.mean)
                })
                .collect();
            CareerArc { key, means }
        })
        .collect()
}

fn common_season_count(traces: &[CareerTrace]) -> usize {
    traces.iter().map(|t| t.seasons.len()).min().unwrap_or(0)
}
