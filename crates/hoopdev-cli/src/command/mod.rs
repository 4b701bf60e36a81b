use clap::{Args, Parser, Subcommand};
use hoopdev_engine::{DevelopmentEngine, DevelopmentSeed, LeagueContext};
use rand::Rng as _;

use self::{
    develop::DevelopArg,
    rating_dists::RatingDistsArg,
    regress_ratings::RegressRatingsArg,
    sample::{CareerArcArg, SampleArg},
};

mod develop;
mod rating_dists;
mod regress_ratings;
mod sample;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Develop one player and print every season as JSON
    Develop(#[clap(flatten)] DevelopArg),
    /// Distribution of career peaks and the ages they were reached at
    MaxRatingDists(#[clap(flatten)] SampleArg),
    /// Career arc of the q1 / median / q3 player for every rating
    AvgRatingDists(#[clap(flatten)] SampleArg),
    /// Mean rating at the start of every season
    CareerArc(#[clap(flatten)] CareerArcArg),
    /// Regress PER on ratings over historical seasons
    RegressRatings(#[clap(flatten)] RegressRatingsArg),
    /// Rating distributions across a league roster
    RatingDists(#[clap(flatten)] RatingDistsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Develop(arg) => develop::run(&arg)?,
        Mode::MaxRatingDists(arg) => sample::run_max_rating_dists(&arg),
        Mode::AvgRatingDists(arg) => sample::run_avg_rating_dists(&arg),
        Mode::CareerArc(arg) => sample::run_career_arc(&arg),
        Mode::RegressRatings(arg) => regress_ratings::run(&arg)?,
        Mode::RatingDists(arg) => rating_dists::run(&arg)?,
    }
    Ok(())
}

/// League and seed options shared by the simulation commands.
#[derive(Debug, Clone, Args)]
struct SimulationArg {
    /// Number of active teams in the league
    #[arg(long, default_value_t = LeagueContext::default().num_active_teams)]
    num_teams: u32,
    /// Coaching rank applied every season (1 = best); defaults to the league average
    #[arg(long)]
    coaching_rank: Option<f64>,
    /// 32-character hex seed; random when omitted
    #[arg(long)]
    seed: Option<DevelopmentSeed>,
}

impl SimulationArg {
    fn engine(&self) -> DevelopmentEngine {
        DevelopmentEngine::new(LeagueContext::new(self.num_teams))
    }

    fn seed(&self) -> DevelopmentSeed {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("seed: {seed}");
        seed
    }
}
