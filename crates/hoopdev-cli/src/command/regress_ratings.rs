use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use hoopdev_analysis::{dataset::DatasetFilter, regression};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct RegressRatingsArg {
    /// JSON file with an array of historical players
    players: PathBuf,
    /// Seasons need strictly more minutes than this
    #[arg(long, default_value_t = DatasetFilter::default().min_minutes)]
    min_minutes: f64,
    /// Leave retired players out
    #[arg(long)]
    exclude_retired: bool,
}

pub(crate) fn run(arg: &RegressRatingsArg) -> anyhow::Result<()> {
    let players = util::read_players_file(&arg.players)?;
    let filter = DatasetFilter {
        min_minutes: arg.min_minutes,
        include_retired: !arg.exclude_retired,
    };

    let coefs = regression::regress_ratings_per(&players, &filter)
        .with_context(|| format!("Failed to regress ratings from {}", arg.players.display()))?;

    println!("PER per 100 rating points");
    for coef in coefs {
        println!("{}: {}", coef.key, coef.per_hundred());
    }
    Ok(())
}
