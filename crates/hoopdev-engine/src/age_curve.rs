//! Per-rating age curves.
//!
//! Every developed rating is assigned one [`FormulaId`]. A formula maps a
//! player's age to an age modifier (added to the season's baseline change)
//! and to the interval the final change is clamped into.
//!
//! Several ratings deliberately share one formula so that correlated skills
//! move together:
//!
//! | formula                  | ratings              |
//! |--------------------------|----------------------|
//! | [`FormulaId::Shooting`]  | ins, ft, fg, tp      |
//! | [`FormulaId::Iq`]        | oiq, diq             |
//! | [`FormulaId::Skill`]     | drb, pss, reb        |
//!
//! The assignment lives in [`AgeCurveTable::formula`] and is part of the
//! engine's contract.

use rand::Rng;

use crate::RatingKey;

/// Closed interval that one season's change of a rating is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeLimits {
    pub low: f64,
    pub high: f64,
}

impl ChangeLimits {
    /// Interval that never clamps.
    pub const UNBOUNDED: Self = Self {
        low: f64::NEG_INFINITY,
        high: f64::INFINITY,
    };

    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Clamps `change` into the interval.
    #[must_use]
    pub fn apply(&self, change: f64) -> f64 {
        change.clamp(self.low, self.high)
    }
}

/// Age modifier and change limits of one rating at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeCurve {
    pub age_modifier: f64,
    pub change_limits: ChangeLimits,
}

/// Identifier of one age-curve formula in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaId {
    Strength,
    Speed,
    Jumping,
    Endurance,
    Dunking,
    Shooting,
    Iq,
    Skill,
}

impl FormulaId {
    /// Value added to the season's baseline change before scaling.
    ///
    /// Only [`FormulaId::Endurance`] draws from `rng` (young players get a
    /// random conditioning boost); every other formula is a pure function
    /// of age.
    pub fn age_modifier<R>(self, age: u32, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Strength => 0.0,
            Self::Speed => match age {
                ..=27 => 0.0,
                28..=30 => -2.0,
                31..=35 => -3.0,
                36..=40 => -4.0,
                _ => -8.0,
            },
            Self::Jumping => match age {
                ..=26 => 0.0,
                27..=30 => -3.0,
                31..=35 => -4.0,
                36..=40 => -5.0,
                _ => -10.0,
            },
            Self::Endurance => match age {
                ..=23 => rng.random_range(0.0..9.0),
                24..=30 => 0.0,
                31..=35 => -2.0,
                36..=40 => -4.0,
                _ => -8.0,
            },
            // Same as shooting for young players, but barely recovers late
            Self::Dunking => {
                if age <= 27 {
                    0.0
                } else {
                    0.5
                }
            }
            Self::Shooting | Self::Skill => shooting_age_modifier(age),
            Self::Iq => match age {
                ..=21 => 4.0,
                22..=23 => 3.0,
                _ => shooting_age_modifier(age),
            },
        }
    }

    /// Interval one season's change is clamped into.
    #[must_use]
    pub fn change_limits(self, age: u32) -> ChangeLimits {
        match self {
            Self::Strength => ChangeLimits::UNBOUNDED,
            Self::Speed | Self::Jumping => ChangeLimits::new(-12.0, 2.0),
            Self::Endurance => ChangeLimits::new(-11.0, 19.0),
            Self::Dunking | Self::Shooting => ChangeLimits::new(-3.0, 13.0),
            Self::Skill => ChangeLimits::new(-2.0, 5.0),
            // 19 => [-3, 32], 23 => [-3, 12]
            Self::Iq if age > 24 => ChangeLimits::new(-3.0, 9.0),
            Self::Iq => ChangeLimits::new(-3.0, 7.0 + 5.0 * f64::from(24 - age)),
        }
    }

    pub fn curve<R>(self, age: u32, rng: &mut R) -> AgeCurve
    where
        R: Rng + ?Sized,
    {
        AgeCurve {
            age_modifier: self.age_modifier(age, rng),
            change_limits: self.change_limits(age),
        }
    }
}

/// Reverses most of the age-related decline built into the baseline change.
fn shooting_age_modifier(age: u32) -> f64 {
    match age {
        ..=27 => 0.0,
        28..=29 => 0.5,
        30..=31 => 1.5,
        _ => 2.0,
    }
}

/// Static lookup from rating key to age curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeCurveTable;

impl AgeCurveTable {
    /// Formula assigned to `key`, or `None` for height.
    #[must_use]
    pub const fn formula(key: RatingKey) -> Option<FormulaId> {
        let id = match key {
            RatingKey::Hgt => return None,
            RatingKey::Stre => FormulaId::Strength,
            RatingKey::Spd => FormulaId::Speed,
            RatingKey::Jmp => FormulaId::Jumping,
            RatingKey::Endu => FormulaId::Endurance,
            RatingKey::Dnk => FormulaId::Dunking,
            RatingKey::Ins | RatingKey::Ft | RatingKey::Fg | RatingKey::Tp => FormulaId::Shooting,
            RatingKey::Oiq | RatingKey::Diq => FormulaId::Iq,
            RatingKey::Drb | RatingKey::Pss | RatingKey::Reb => FormulaId::Skill,
        };
        Some(id)
    }

    /// Age curve of `key` at `age`, or `None` for height.
    pub fn curve<R>(key: RatingKey, age: u32, rng: &mut R) -> Option<AgeCurve>
    where
        R: Rng + ?Sized,
    {
        Self::formula(key).map(|formula| formula.curve(age, rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const ALL_FORMULAS: [FormulaId; 8] = [
        FormulaId::Strength,
        FormulaId::Speed,
        FormulaId::Jumping,
        FormulaId::Endurance,
        FormulaId::Dunking,
        FormulaId::Shooting,
        FormulaId::Iq,
        FormulaId::Skill,
    ];

    #[test]
    fn test_shared_formula_assignment() {
        let shooting = [RatingKey::Ins, RatingKey::Ft, RatingKey::Fg, RatingKey::Tp];
        for key in shooting {
            assert_eq!(AgeCurveTable::formula(key), Some(FormulaId::Shooting));
        }
        for key in [RatingKey::Oiq, RatingKey::Diq] {
            assert_eq!(AgeCurveTable::formula(key), Some(FormulaId::Iq));
        }
        for key in [RatingKey::Drb, RatingKey::Pss, RatingKey::Reb] {
            assert_eq!(AgeCurveTable::formula(key), Some(FormulaId::Skill));
        }
        assert_eq!(AgeCurveTable::formula(RatingKey::Dnk), Some(FormulaId::Dunking));
        assert_eq!(AgeCurveTable::formula(RatingKey::Hgt), None);
        for key in RatingKey::DEVELOPED {
            assert!(AgeCurveTable::formula(key).is_some());
        }
    }

    #[test]
    fn test_change_limits_are_ordered() {
        for formula in ALL_FORMULAS {
            for age in 0..=80 {
                let limits = formula.change_limits(age);
                assert!(limits.low <= limits.high, "{formula:?} at {age}");
            }
        }
    }

    #[test]
    fn test_iq_limits_widen_for_young_players() {
        assert_eq!(FormulaId::Iq.change_limits(19), ChangeLimits::new(-3.0, 32.0));
        assert_eq!(FormulaId::Iq.change_limits(23), ChangeLimits::new(-3.0, 12.0));
        assert_eq!(FormulaId::Iq.change_limits(24), ChangeLimits::new(-3.0, 7.0));
        assert_eq!(FormulaId::Iq.change_limits(25), ChangeLimits::new(-3.0, 9.0));
    }

    #[test]
    fn test_age_modifiers() {
        let mut rng = Pcg32::seed_from_u64(0);
        assert!(FormulaId::Shooting.age_modifier(25, &mut rng).abs() < f64::EPSILON);
        assert!((FormulaId::Shooting.age_modifier(30, &mut rng) - 1.5).abs() < f64::EPSILON);
        assert!((FormulaId::Iq.age_modifier(20, &mut rng) - 4.0).abs() < f64::EPSILON);
        assert!((FormulaId::Iq.age_modifier(35, &mut rng) - 2.0).abs() < f64::EPSILON);
        assert!((FormulaId::Speed.age_modifier(50, &mut rng) + 8.0).abs() < f64::EPSILON);
        assert!((FormulaId::Jumping.age_modifier(27, &mut rng) + 3.0).abs() < f64::EPSILON);
        assert!((FormulaId::Dunking.age_modifier(33, &mut rng) - 0.5).abs() < f64::EPSILON);
        for _ in 0..100 {
            let endu = FormulaId::Endurance.age_modifier(20, &mut rng);
            assert!((0.0..9.0).contains(&endu));
        }
    }

    #[test]
    fn test_unbounded_limits_never_clamp() {
        let limits = AgeCurveTable::curve(RatingKey::Stre, 30, &mut Pcg32::seed_from_u64(1))
            .unwrap()
            .change_limits;
        assert_eq!(limits, ChangeLimits::UNBOUNDED);
        assert!((limits.apply(-1e9) + 1e9).abs() < f64::EPSILON);
    }
}
