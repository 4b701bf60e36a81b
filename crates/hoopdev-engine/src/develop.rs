//! Season-by-season rating development.
//!
//! [`DevelopmentEngine::develop_season`] advances one player's ratings by one
//! simulated season:
//!
//! 1. Players 21 and younger may grow (two rare, independent checks).
//! 2. Three baseline changes are drawn, one per [`RatingCategory`].
//! 3. Every developed rating combines its category's baseline change with
//!    its age modifier, scales the sum by a uniform factor in
//!    `[0.4, 1.4)`, clamps it into the formula's change limits, and stores
//!    the rounded result saturated into `[0, 100]`.
//!
//! The step never fails. Unusual ages fall into the nearest bracket and all
//! values are saturated rather than rejected.
//!
//! [`RatingCategory`]: crate::RatingCategory

use rand::Rng;

use crate::{
    AgeCurveTable, HEIGHT_CEILING, LeagueContext, RatingKey, RatingProfile,
    base_change::BaseChanges, limit_rating,
};

/// Oldest age at which height can still increase.
pub const GROWTH_MAX_AGE: u32 = 21;

const SMALL_GROWTH_MAX_AGE: u32 = 20;
const SMALL_GROWTH_CHANCE: f64 = 0.01;
const LARGE_GROWTH_CHANCE: f64 = 0.001;

const SCALE_MIN: f64 = 0.4;
const SCALE_MAX: f64 = 1.4;

/// Applies age curves and baseline changes to player ratings.
///
/// # Example
///
/// ```
/// use hoopdev_engine::{DevelopmentEngine, LeagueContext, RatingProfile};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
///
/// let engine = DevelopmentEngine::new(LeagueContext::new(30));
/// let mut rng = Pcg32::seed_from_u64(2024);
/// let mut ratings = RatingProfile::uniform(45);
///
/// // Best coaching staff in the league
/// engine.develop_season(&mut ratings, 20, Some(1.0), &mut rng);
/// assert!(ratings.iter().all(|(_, v)| v <= 100));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DevelopmentEngine {
    ctx: LeagueContext,
}

impl DevelopmentEngine {
    #[must_use]
    pub const fn new(ctx: LeagueContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn context(&self) -> &LeagueContext {
        &self.ctx
    }

    /// Develops `ratings` in place by one season for a player of `age`.
    ///
    /// `coaching_rank` defaults to the league-average rank.
    pub fn develop_season<R>(
        &self,
        ratings: &mut RatingProfile,
        age: u32,
        coaching_rank: Option<f64>,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        let coaching_rank = coaching_rank.unwrap_or_else(|| self.ctx.average_coaching_rank());

        if age <= GROWTH_MAX_AGE {
            grow(ratings, age, rng);
        }

        let base = BaseChanges::generate(age, coaching_rank, &self.ctx, rng);
        for key in RatingKey::DEVELOPED {
            let (Some(category), Some(curve)) =
                (key.category(), AgeCurveTable::curve(key, age, rng))
            else {
                continue;
            };
            let scale = rng.random_range(SCALE_MIN..SCALE_MAX);
            let change = curve
                .change_limits
                .apply((base.get(category) + curve.age_modifier) * scale);
            let value = limit_rating(f64::from(ratings.get(key)) + change);
            ratings.set(key, value);
        }

        log::trace!("developed season at age {age} (coaching rank {coaching_rank}): {base:?}");
    }

    /// Develops `ratings` over `years` consecutive seasons starting at `age`.
    ///
    /// The player ages by one year after each season. Returns the age after
    /// the last season.
    pub fn develop<R>(
        &self,
        ratings: &mut RatingProfile,
        age: u32,
        years: u32,
        coaching_rank: Option<f64>,
        rng: &mut R,
    ) -> u32
    where
        R: Rng + ?Sized,
    {
        let mut age = age;
        for _ in 0..years {
            self.develop_season(ratings, age, coaching_rank, rng);
            age = age.saturating_add(1);
        }
        age
    }
}

fn grow<R>(ratings: &mut RatingProfile, age: u32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if rng.random_bool(SMALL_GROWTH_CHANCE) && age <= SMALL_GROWTH_MAX_AGE {
        grow_by_one(ratings);
    }
    if rng.random_bool(LARGE_GROWTH_CHANCE) {
        grow_by_one(ratings);
    }
}

fn grow_by_one(ratings: &mut RatingProfile) {
    let height = ratings.get(RatingKey::Hgt);
    if height < HEIGHT_CEILING {
        ratings.set(RatingKey::Hgt, height + 1);
    }
}
