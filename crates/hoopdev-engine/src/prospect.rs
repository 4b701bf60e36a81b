use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::{RatingProfile, limit_rating};

/// A freshly generated player entering development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub age: u32,
    pub ratings: RatingProfile,
}

/// Supplier of fresh prospects, i.e. the draft-class generator.
///
/// Implementations must be shareable across worker threads; each call gets
/// the generator of the career being simulated so results stay reproducible.
pub trait ProspectSource: Send + Sync {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> Prospect;
}

/// Prospect generator drawing every rating from one normal distribution.
///
/// Stands in for the full draft-class generator when calibrating age curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomProspectSource {
    pub age: u32,
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for RandomProspectSource {
    fn default() -> Self {
        Self {
            age: 19,
            mean: 42.0,
            std_dev: 12.0,
        }
    }
}

impl ProspectSource for RandomProspectSource {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> Prospect {
        let ratings = RatingProfile::from_fn(|_| {
            let z: f64 = rng.sample(StandardNormal);
            limit_rating(self.mean + z * self.std_dev)
        });
        Prospect {
            age: self.age,
            ratings,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{MAX_RATING, RatingKey};

    #[test]
    fn test_prospects_are_reproducible() {
        let source = RandomProspectSource::default();
        let a = source.generate(&mut Pcg32::seed_from_u64(5));
        let b = source.generate(&mut Pcg32::seed_from_u64(5));
        assert_eq!(a, b);
        assert_eq!(a.age, 19);
    }

    #[test]
    fn test_prospect_ratings_within_bounds() {
        let source = RandomProspectSource {
            age: 20,
            mean: 95.0,
            std_dev: 40.0,
        };
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..200 {
            let prospect = source.generate(&mut rng);
            for key in RatingKey::ALL {
                assert!(prospect.ratings.get(key) <= MAX_RATING);
            }
        }
    }
}
