use clap::Args;
use hoopdev_analysis::career::{
    self, CareerSampler, CareerTrace, DEFAULT_NUM_SEASONS, SamplerConfig,
};
use hoopdev_engine::{RandomProspectSource, RatingKey};

use super::SimulationArg;

#[derive(Debug, Clone, Args)]
pub(crate) struct SampleArg {
    /// Number of synthetic careers
    #[arg(long, default_value_t = 100)]
    num_players: usize,
    /// Seasons simulated per career
    #[arg(long, default_value_t = DEFAULT_NUM_SEASONS)]
    num_seasons: u32,
    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    #[clap(flatten)]
    sim: SimulationArg,
}

impl SampleArg {
    fn sample(&self) -> Vec<CareerTrace> {
        let config = SamplerConfig {
            num_players: self.num_players,
            num_seasons: self.num_seasons,
            coaching_rank: self.sim.coaching_rank,
            seed: self.sim.seed(),
            threads: self.threads,
        };
        CareerSampler::new(self.sim.engine(), config, RandomProspectSource::default())
            .sample_traces()
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CareerArcArg {
    #[clap(flatten)]
    sample: SampleArg,
    /// Only report this rating (e.g. `tp`)
    #[arg(long)]
    rating: Option<RatingKey>,
}

pub(crate) fn run_max_rating_dists(arg: &SampleArg) {
    let traces = arg.sample();
    let dists = career::max_rating_dists(&traces);

    println!("Ranges are min/q1/median/q3/max");
    println!();
    for dist in dists {
        println!("{}:", dist.key);
        println!("Max ratings: {:?}", dist.max_ratings.as_array());
        println!("Ages of max ratings: {:?}", dist.ages.as_array());
        println!("Number of 100s: {}", dist.num_100s);
        println!();
    }
}

pub(crate) fn run_avg_rating_dists(arg: &SampleArg) {
    let traces = arg.sample();
    let dists = career::season_rating_dists(&traces);

    println!("Career arc for the q1/median/q3 player");
    println!();
    for dist in dists {
        let q1s = dist.seasons.iter().map(|s| s.q1).collect::<Vec<_>>();
        let q2s = dist.seasons.iter().map(|s| s.median).collect::<Vec<_>>();
        let q3s = dist.seasons.iter().map(|s| s.q3).collect::<Vec<_>>();
        println!("{}:", dist.key);
        println!("q1: {q1s:?}");
        println!("q2: {q2s:?}");
        println!("q3: {q3s:?}");
        println!();
    }
}

pub(crate) fn run_career_arc(arg: &CareerArcArg) {
    let traces = arg.sample.sample();
    let arcs = career::average_career_arc(&traces);

    println!("Mean rating at the start of each season");
    println!();
    for arc in arcs
        .iter()
        .filter(|a| arg.rating.is_none_or(|key| key == a.key))
    {
        let means = arc
            .means
            .iter()
            .map(|m| format!("{m:.1}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: [{means}]", arc.key);
    }
}
