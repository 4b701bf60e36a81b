//! Season-by-season rating development for simulated basketball players.
//!
//! This crate implements the attribute-evolution engine the league simulation
//! calls once per player per season, and that the calibration tooling calls
//! thousands of times per analysis run.
//!
//! # Components
//!
//! - [`RatingProfile`] / [`RatingKey`] - the fifteen integer ratings of one player
//! - [`age_curve`] - per-rating age modifiers and change limits ([`AgeCurveTable`])
//! - [`base_change`] - noisy, coaching-adjusted baseline change per rating category
//! - [`DevelopmentEngine`] - applies both to mutate a profile by one season
//! - [`DevelopmentSeed`] - reproducible random streams
//! - [`ProspectSource`] - supplier of freshly generated players
//!
//! # Example
//!
//! ```
//! use hoopdev_engine::{
//!     DevelopmentEngine, DevelopmentSeed, LeagueContext, RatingKey, RatingProfile,
//! };
//!
//! let engine = DevelopmentEngine::new(LeagueContext::new(30));
//! let mut rng = DevelopmentSeed::from_u64(7).rng();
//!
//! let mut ratings = RatingProfile::uniform(40);
//! let age = engine.develop(&mut ratings, 19, 4, None, &mut rng);
//!
//! assert_eq!(age, 23);
//! println!("three point shooting after four seasons: {}", ratings[RatingKey::Tp]);
//! ```

pub use self::{
    age_curve::{AgeCurve, AgeCurveTable, ChangeLimits, FormulaId},
    base_change::{BaseChanges, LeagueContext},
    develop::DevelopmentEngine,
    prospect::{Prospect, ProspectSource, RandomProspectSource},
    rating::*,
    seed::{DevelopmentSeed, ParseSeedError},
};

pub mod age_curve;
pub mod base_change;
pub mod develop;
pub mod prospect;
mod rating;
mod seed;
