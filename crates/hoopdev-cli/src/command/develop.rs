use std::path::PathBuf;

use hoopdev_analysis::career::{CareerSampler, SamplerConfig};
use hoopdev_engine::{Prospect, ProspectSource, RandomProspectSource, RatingProfile};

use super::SimulationArg;
use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DevelopArg {
    /// JSON file with the starting ratings; a random prospect when omitted
    #[arg(long)]
    ratings: Option<PathBuf>,
    /// Age at the start of the first season
    #[arg(long, default_value_t = 19)]
    age: u32,
    /// Seasons to simulate
    #[arg(long, default_value_t = 1)]
    years: u32,
    #[clap(flatten)]
    sim: SimulationArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Always hands out the same player.
struct FixedProspect(Prospect);

impl ProspectSource for FixedProspect {
    fn generate(&self, _rng: &mut dyn rand::RngCore) -> Prospect {
        self.0
    }
}

pub(crate) fn run(arg: &DevelopArg) -> anyhow::Result<()> {
    let seed = arg.sim.seed();
    let config = SamplerConfig {
        num_players: 1,
        num_seasons: arg.years,
        coaching_rank: arg.sim.coaching_rank,
        seed,
        threads: 1,
    };

    let trace = if let Some(path) = &arg.ratings {
        let ratings: RatingProfile = util::read_json_file("ratings", path)?;
        let source = FixedProspect(Prospect {
            age: arg.age,
            ratings,
        });
        CareerSampler::new(arg.sim.engine(), config, source).run_career(seed)
    } else {
        let source = RandomProspectSource {
            age: arg.age,
            ..RandomProspectSource::default()
        };
        CareerSampler::new(arg.sim.engine(), config, source).run_career(seed)
    };

    Output::save_json(&trace, arg.output.clone())
}
