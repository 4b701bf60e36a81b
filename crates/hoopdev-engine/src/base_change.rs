//! Baseline change generation.
//!
//! The baseline change is the raw, noisy, age-and-coaching-derived delta
//! shared by every rating of one [`RatingCategory`] in one season.
//!
//! 1. An age bracket picks a deterministic base value, peaking for the
//!    youngest players and declining past the mid-twenties.
//! 2. Bounded Gaussian noise is added; young players get a wider spread.
//! 3. The result is scaled by coaching quality: good coaching amplifies
//!    improvement and dampens decline. A league-average coaching rank is
//!    neutral.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::RatingCategory;

const NOISE_SCALE: f64 = 1.732; // sqrt(3)

/// League-wide settings the development formulas depend on.
///
/// Passed explicitly instead of being read from global game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueContext {
    /// Number of active teams, i.e. the worst possible coaching rank.
    pub num_active_teams: u32,
}

impl Default for LeagueContext {
    fn default() -> Self {
        Self {
            num_active_teams: 30,
        }
    }
}

impl LeagueContext {
    #[must_use]
    pub const fn new(num_active_teams: u32) -> Self {
        Self { num_active_teams }
    }

    /// Coaching rank of a league-average staff.
    ///
    /// ```
    /// use hoopdev_engine::LeagueContext;
    ///
    /// assert_eq!(LeagueContext::new(30).average_coaching_rank(), 15.5);
    /// ```
    #[must_use]
    pub fn average_coaching_rank(&self) -> f64 {
        (f64::from(self.num_active_teams) + 1.0) / 2.0
    }

    /// Saturates `rank` into `[1, num_active_teams]`.
    #[must_use]
    pub fn clamp_coaching_rank(&self, rank: f64) -> f64 {
        let worst = f64::from(self.num_active_teams.max(1));
        if rank.is_nan() {
            return self.average_coaching_rank();
        }
        rank.clamp(1.0, worst)
    }
}

/// Deterministic part of the baseline change for `age`.
#[must_use]
pub fn bracket_base(age: u32) -> f64 {
    match age {
        ..=21 => 2.0,
        22..=25 => 1.0,
        26..=27 => 0.0,
        28..=29 => -1.0,
        30..=31 => -2.0,
        32..=34 => -3.0,
        35..=40 => -4.0,
        41..=43 => -5.0,
        _ => -6.0,
    }
}

/// Draws bounded Gaussian noise whose spread shrinks with age.
pub fn noise<R>(age: u32, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let (std_dev, low, high) = match age {
        ..=23 => (5.0, -4.0, 20.0),
        24..=25 => (5.0, -4.0, 10.0),
        _ => (3.0, -2.0, 4.0),
    };
    let z: f64 = rng.sample(StandardNormal);
    (z * std_dev * NOISE_SCALE).clamp(low * NOISE_SCALE, high * NOISE_SCALE)
}

/// Baseline change before the coaching adjustment.
pub fn raw_base_change<R>(age: u32, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    bracket_base(age) + noise(age, rng)
}

/// Multiplier applied to a raw baseline change of `value`.
///
/// Linear in `coaching_rank - 1` normalized by `num_active_teams - 1`, and
/// exactly 1 at the league-average rank. A league with a single team has no
/// coaching spread, so the multiplier is neutral.
///
/// ```
/// use hoopdev_engine::{LeagueContext, base_change::coaching_multiplier};
///
/// let ctx = LeagueContext::new(30);
/// assert_eq!(coaching_multiplier(1.0, 1.0, &ctx), 1.25);
/// assert_eq!(coaching_multiplier(1.0, 30.0, &ctx), 0.75);
/// assert_eq!(coaching_multiplier(-1.0, 1.0, &ctx), 0.75);
/// assert_eq!(coaching_multiplier(-1.0, 15.5, &ctx), 1.0);
/// ```
#[must_use]
pub fn coaching_multiplier(value: f64, coaching_rank: f64, ctx: &LeagueContext) -> f64 {
    if ctx.num_active_teams <= 1 {
        return 1.0;
    }
    let rank = ctx.clamp_coaching_rank(coaching_rank);
    let spread = (rank - 1.0) / f64::from(ctx.num_active_teams - 1);
    if value >= 0.0 {
        spread * -0.5 + 1.25
    } else {
        spread * 0.5 + 0.75
    }
}

/// Full baseline change: bracket base, noise and coaching adjustment.
pub fn base_change<R>(age: u32, coaching_rank: f64, ctx: &LeagueContext, rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    let value = raw_base_change(age, rng);
    value * coaching_multiplier(value, coaching_rank, ctx)
}

/// One baseline change per rating category for a single season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseChanges {
    pub physical: f64,
    pub shooting: f64,
    pub mental: f64,
}

impl BaseChanges {
    /// Draws the three category changes independently.
    pub fn generate<R>(age: u32, coaching_rank: f64, ctx: &LeagueContext, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let physical = base_change(age, coaching_rank, ctx, rng);
        let shooting = base_change(age, coaching_rank, ctx, rng);
        let mental = base_change(age, coaching_rank, ctx, rng);
        Self {
            physical,
            shooting,
            mental,
        }
    }

    #[must_use]
    pub fn get(&self, category: RatingCategory) -> f64 {
        match category {
            RatingCategory::Physical => self.physical,
            RatingCategory::Shooting => self.shooting,
            RatingCategory::Mental => self.mental,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_bracket_base_is_monotonic() {
        let mut prev = bracket_base(0);
        for age in 1..=60 {
            let base = bracket_base(age);
            assert!(base <= prev, "age {age}");
            prev = base;
        }
        assert!((bracket_base(19) - 2.0).abs() < f64::EPSILON);
        assert!((bracket_base(27)).abs() < f64::EPSILON);
        assert!((bracket_base(99) + 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_noise_is_bounded() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..10_000 {
            let young = noise(20, &mut rng);
            assert!((-4.0 * NOISE_SCALE..=20.0 * NOISE_SCALE).contains(&young));
            let mid = noise(25, &mut rng);
            assert!((-4.0 * NOISE_SCALE..=10.0 * NOISE_SCALE).contains(&mid));
            let old = noise(33, &mut rng);
            assert!((-2.0 * NOISE_SCALE..=4.0 * NOISE_SCALE).contains(&old));
        }
    }

    #[test]
    fn test_average_rank_is_neutral() {
        for teams in [2, 3, 10, 30] {
            let ctx = LeagueContext::new(teams);
            let avg = ctx.average_coaching_rank();
            assert!((coaching_multiplier(3.0, avg, &ctx) - 1.0).abs() < 1e-12);
            assert!((coaching_multiplier(-3.0, avg, &ctx) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_team_league_is_neutral() {
        let ctx = LeagueContext::new(1);
        assert!((coaching_multiplier(5.0, 1.0, &ctx) - 1.0).abs() < f64::EPSILON);
        assert!((coaching_multiplier(-5.0, 1.0, &ctx) - 1.0).abs() < f64::EPSILON);
        let ctx = LeagueContext::new(0);
        assert!((coaching_multiplier(5.0, 1.0, &ctx) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_rank_saturates() {
        let ctx = LeagueContext::new(30);
        assert!(
            (coaching_multiplier(1.0, -4.0, &ctx) - coaching_multiplier(1.0, 1.0, &ctx)).abs()
                < f64::EPSILON
        );
        assert!(
            (coaching_multiplier(1.0, 99.0, &ctx) - coaching_multiplier(1.0, 30.0, &ctx)).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_better_coaching_helps_under_same_draws() {
        let ctx = LeagueContext::new(30);
        for seed in 0..200 {
            for age in [19, 24, 28, 35] {
                let best = base_change(age, 1.0, &ctx, &mut Pcg32::seed_from_u64(seed));
                let worst = base_change(age, 30.0, &ctx, &mut Pcg32::seed_from_u64(seed));
                if best >= 0.0 {
                    assert!(best >= worst);
                } else {
                    assert!(best.abs() <= worst.abs());
                    assert!(worst < 0.0);
                }
            }
        }
    }

    #[test]
    fn test_categories_draw_independently() {
        let ctx = LeagueContext::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let differing = (0..20)
            .map(|_| BaseChanges::generate(20, ctx.average_coaching_rank(), &ctx, &mut rng))
            .filter(|c| (c.physical - c.shooting).abs() > f64::EPSILON)
            .count();
        assert!(differing > 0);

        let changes = BaseChanges {
            physical: 1.0,
            shooting: 2.0,
            mental: 3.0,
        };
        assert!((changes.get(RatingCategory::Mental) - 3.0).abs() < f64::EPSILON);
    }
}
