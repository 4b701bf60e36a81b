//! Historical player records and their projection into regression rows.

use hoopdev_engine::{RatingKey, RatingProfile};
use serde::{Deserialize, Serialize};

/// Roster status of a historical player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    FreeAgent,
    Undrafted,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRatings {
    pub season: i32,
    pub ratings: RatingProfile,
}

/// Season totals of one stat line.
///
/// A player traded mid-season has several regular-season lines for the same
/// season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub season: i32,
    #[serde(default)]
    pub playoffs: bool,
    /// Minutes played.
    pub min: f64,
    /// Player efficiency rating.
    pub per: f64,
}

/// One player as exported from the league store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPlayer {
    pub pid: u32,
    pub status: PlayerStatus,
    #[serde(default)]
    pub ratings: Vec<SeasonRatings>,
    #[serde(default)]
    pub stats: Vec<SeasonStats>,
}

impl HistoricalPlayer {
    /// Ratings recorded for `season`, if any.
    #[must_use]
    pub fn ratings_in(&self, season: i32) -> Option<&RatingProfile> {
        self.ratings
            .iter()
            .find(|r| r.season == season)
            .map(|r| &r.ratings)
    }
}

/// Which records make it into a [`RatingsPerDataset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetFilter {
    /// Stat lines need strictly more minutes than this.
    pub min_minutes: f64,
    pub include_retired: bool,
}

impl Default for DatasetFilter {
    fn default() -> Self {
        Self {
            min_minutes: 500.0,
            include_retired: true,
        }
    }
}

impl DatasetFilter {
    #[must_use]
    pub fn accepts_player(&self, player: &HistoricalPlayer) -> bool {
        self.include_retired || player.status != PlayerStatus::Retired
    }

    #[must_use]
    pub fn accepts_stats(&self, stats: &SeasonStats) -> bool {
        !stats.playoffs && stats.min > self.min_minutes
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("no season of {players} players passed the filter (min_minutes = {min_minutes})")]
    Empty { players: usize, min_minutes: f64 },
}

/// Ratings paired with the efficiency produced in the same season.
///
/// Every rating entry is matched against every regular-season stat line of
/// the same season; each match with enough minutes yields one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsPerDataset {
    ratings: Vec<RatingProfile>,
    per: Vec<f64>,
}

impl RatingsPerDataset {
    pub fn build(
        players: &[HistoricalPlayer],
        filter: &DatasetFilter,
    ) -> Result<Self, DatasetError> {
        let mut ratings = vec![];
        let mut per = vec![];
        for player in players.iter().filter(|p| filter.accepts_player(p)) {
            for season_ratings in &player.ratings {
                let matching = player
                    .stats
                    .iter()
                    .filter(|s| s.season == season_ratings.season && filter.accepts_stats(s));
                for stats in matching {
                    ratings.push(season_ratings.ratings);
                    per.push(stats.per);
                }
            }
        }

        if ratings.is_empty() {
            return Err(DatasetError::Empty {
                players: players.len(),
                min_minutes: filter.min_minutes,
            });
        }
        log::debug!("built {} rating/PER rows from {} players", ratings.len(), players.len());
        Ok(Self { ratings, per })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    #[must_use]
    pub fn ratings(&self) -> &[RatingProfile] {
        &self.ratings
    }

    #[must_use]
    pub fn per(&self) -> &[f64] {
        &self.per
    }

    /// Rows of the design matrix, one column per [`RatingKey::ALL`] entry.
    #[must_use]
    pub fn feature_rows(&self) -> Vec<Vec<f64>> {
        self.ratings.iter().map(RatingProfile::to_features).collect()
    }

    /// Column labels matching [`Self::feature_rows`].
    #[must_use]
    pub fn feature_labels() -> [RatingKey; RatingKey::LEN] {
        RatingKey::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(season: i32, playoffs: bool, min: f64, per: f64) -> SeasonStats {
        SeasonStats {
            season,
            playoffs,
            min,
            per,
        }
    }

    fn player(pid: u32, status: PlayerStatus) -> HistoricalPlayer {
        HistoricalPlayer {
            pid,
            status,
            ratings: vec![
                SeasonRatings {
                    season: 2020,
                    ratings: RatingProfile::uniform(40),
                },
                SeasonRatings {
                    season: 2021,
                    ratings: RatingProfile::uniform(50),
                },
            ],
            stats: vec![
                stats(2020, false, 1200.0, 14.0),
                stats(2020, true, 900.0, 30.0),
                stats(2021, false, 500.0, 9.0),
                stats(2021, false, 800.0, 18.0),
                stats(2022, false, 2000.0, 20.0),
            ],
        }
    }

    #[test]
    fn test_filters_playoffs_minutes_and_seasons() {
        let players = [player(1, PlayerStatus::Active)];
        let data = RatingsPerDataset::build(&players, &DatasetFilter::default()).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.per(), &[14.0, 18.0]);
        assert_eq!(
            data.ratings(),
            &[RatingProfile::uniform(40), RatingProfile::uniform(50)]
        );
    }

    #[test]
    fn test_minutes_threshold_is_strict_and_configurable() {
        let players = [player(1, PlayerStatus::Active)];
        let filter = DatasetFilter {
            min_minutes: 499.0,
            ..DatasetFilter::default()
        };
        let data = RatingsPerDataset::build(&players, &filter).unwrap();
        assert_eq!(data.per(), &[14.0, 9.0, 18.0]);
    }

    #[test]
    fn test_retired_players_optional() {
        let players = [player(1, PlayerStatus::Retired), player(2, PlayerStatus::FreeAgent)];
        let all = RatingsPerDataset::build(&players, &DatasetFilter::default()).unwrap();
        assert_eq!(all.len(), 4);

        let filter = DatasetFilter {
            include_retired: false,
            ..DatasetFilter::default()
        };
        let active = RatingsPerDataset::build(&players, &filter).unwrap();
        assert_eq!(active.len(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let filter = DatasetFilter {
            min_minutes: 5000.0,
            ..DatasetFilter::default()
        };
        let players = [player(1, PlayerStatus::Active)];
        let err = RatingsPerDataset::build(&players, &filter).unwrap_err();
        assert_eq!(
            err,
            DatasetError::Empty {
                players: 1,
                min_minutes: 5000.0
            }
        );
        assert!(RatingsPerDataset::build(&[], &DatasetFilter::default()).is_err());
    }

    #[test]
    fn test_deserialize_player() {
        let json = r#"{
            "pid": 7,
            "status": "free_agent",
            "ratings": [{
                "season": 2019,
                "ratings": {
                    "hgt": 50, "stre": 40, "spd": 60, "jmp": 55, "endu": 45,
                    "ins": 30, "dnk": 35, "ft": 70, "fg": 65, "tp": 60,
                    "oiq": 50, "diq": 45, "drb": 55, "pss": 50, "reb": 40
                }
            }],
            "stats": [{ "season": 2019, "min": 1500.5, "per": 16.2 }]
        }"#;
        let player: HistoricalPlayer = serde_json::from_str(json).unwrap();
        assert_eq!(player.status, PlayerStatus::FreeAgent);
        assert!(!player.stats[0].playoffs);
        assert_eq!(player.ratings_in(2019).unwrap()[RatingKey::Tp], 60);
        assert!(player.ratings_in(2020).is_none());
    }
}
