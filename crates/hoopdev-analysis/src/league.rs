//! Rating distributions across a league roster.

use hoopdev_engine::RatingKey;
use hoopdev_stats::percentiles::FiveNumberSummary;
use serde::Serialize;

use crate::dataset::{HistoricalPlayer, PlayerStatus};

/// Spread of one rating across the league.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueRatingDist {
    pub key: RatingKey,
    pub summary: FiveNumberSummary<u8>,
}

/// Five-number summary of every rating across non-retired players in
/// `season`.
///
/// Players without ratings for `season` are skipped. Returns an empty list
/// when nobody qualifies.
#[must_use]
pub fn league_rating_dists(players: &[HistoricalPlayer], season: i32) -> Vec<LeagueRatingDist> {
    let profiles = players
        .iter()
        .filter(|p| p.status != PlayerStatus::Retired)
        .filter_map(|p| p.ratings_in(season))
        .collect::<Vec<_>>();
    log::debug!("{} rated players in season {season}", profiles.len());

    RatingKey::ALL
        .into_iter()
        .filter_map(|key| {
            let summary = FiveNumberSummary::new(profiles.iter().map(|r| r[key]))?;
            Some(LeagueRatingDist { key, summary })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use hoopdev_engine::RatingProfile;

    use super::*;
    use crate::dataset::SeasonRatings;

    fn player(status: PlayerStatus, season: i32, value: u8) -> HistoricalPlayer {
        HistoricalPlayer {
            pid: u32::from(value),
            status,
            ratings: vec![SeasonRatings {
                season,
                ratings: RatingProfile::uniform(value),
            }],
            stats: vec![],
        }
    }

    #[test]
    fn test_summarizes_non_retired_players() {
        let players = [
            player(PlayerStatus::Active, 2021, 40),
            player(PlayerStatus::FreeAgent, 2021, 10),
            player(PlayerStatus::Retired, 2021, 99),
            player(PlayerStatus::Undrafted, 2021, 30),
            player(PlayerStatus::Active, 2021, 20),
            player(PlayerStatus::Active, 2020, 77),
        ];
        let dists = league_rating_dists(&players, 2021);
        assert_eq!(dists.len(), RatingKey::LEN);
        for dist in dists {
            assert_eq!(dist.summary.as_array(), [10, 20, 30, 40, 40]);
        }
    }

    #[test]
    fn test_no_rated_players() {
        let players = [player(PlayerStatus::Retired, 2021, 50)];
        assert!(league_rating_dists(&players, 2021).is_empty());
        assert!(league_rating_dists(&[], 2021).is_empty());
    }
}
