use std::path::PathBuf;

use clap::Args;
use hoopdev_analysis::league;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct RatingDistsArg {
    /// JSON file with an array of historical players
    players: PathBuf,
    /// Season to summarize; the latest rated season when omitted
    #[arg(long)]
    season: Option<i32>,
}

pub(crate) fn run(arg: &RatingDistsArg) -> anyhow::Result<()> {
    let players = util::read_players_file(&arg.players)?;
    let Some(season) = arg.season.or_else(|| {
        players
            .iter()
            .flat_map(|p| p.ratings.iter().map(|r| r.season))
            .max()
    }) else {
        anyhow::bail!("No rated seasons in {}", arg.players.display());
    };

    let dists = league::league_rating_dists(&players, season);
    if dists.is_empty() {
        anyhow::bail!("No active players rated in season {season}");
    }

    println!("Season {season}, ranges are min/q1/median/q3/max");
    for dist in dists {
        println!("{}: {:?}", dist.key, dist.summary.as_array());
    }
    Ok(())
}
