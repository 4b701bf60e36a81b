use std::{
    fmt,
    ops::Index,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Lowest value any rating can take.
pub const MIN_RATING: u8 = 0;
/// Highest value any rating can take.
pub const MAX_RATING: u8 = 100;
/// Height never grows past this value.
pub const HEIGHT_CEILING: u8 = 100;

/// One named skill dimension of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingKey {
    Hgt,
    Stre,
    Spd,
    Jmp,
    Endu,
    Ins,
    Dnk,
    Ft,
    Fg,
    Tp,
    Oiq,
    Diq,
    Drb,
    Pss,
    Reb,
}

/// Group of ratings that share one baseline change per season.
///
/// All ratings in a category move with the same noisy draw, so physical
/// decline (for example) hits speed and jumping together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingCategory {
    Physical,
    Shooting,
    Mental,
}

impl RatingKey {
    pub const LEN: usize = 15;

    /// Every key, in the order ratings are reported.
    pub const ALL: [RatingKey; Self::LEN] = [
        Self::Hgt,
        Self::Stre,
        Self::Spd,
        Self::Jmp,
        Self::Endu,
        Self::Ins,
        Self::Dnk,
        Self::Ft,
        Self::Fg,
        Self::Tp,
        Self::Oiq,
        Self::Diq,
        Self::Drb,
        Self::Pss,
        Self::Reb,
    ];

    /// Keys changed by the season development step (everything but height).
    pub const DEVELOPED: [RatingKey; Self::LEN - 1] = [
        Self::Stre,
        Self::Spd,
        Self::Jmp,
        Self::Endu,
        Self::Ins,
        Self::Dnk,
        Self::Ft,
        Self::Fg,
        Self::Tp,
        Self::Oiq,
        Self::Diq,
        Self::Drb,
        Self::Pss,
        Self::Reb,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hgt => "hgt",
            Self::Stre => "stre",
            Self::Spd => "spd",
            Self::Jmp => "jmp",
            Self::Endu => "endu",
            Self::Ins => "ins",
            Self::Dnk => "dnk",
            Self::Ft => "ft",
            Self::Fg => "fg",
            Self::Tp => "tp",
            Self::Oiq => "oiq",
            Self::Diq => "diq",
            Self::Drb => "drb",
            Self::Pss => "pss",
            Self::Reb => "reb",
        }
    }

    /// Category whose baseline change drives this rating.
    ///
    /// Returns `None` for height, which only changes through growth events.
    #[must_use]
    pub const fn category(self) -> Option<RatingCategory> {
        match self {
            Self::Hgt => None,
            Self::Stre | Self::Spd | Self::Jmp | Self::Endu => Some(RatingCategory::Physical),
            Self::Ins | Self::Dnk | Self::Ft | Self::Fg | Self::Tp => {
                Some(RatingCategory::Shooting)
            }
            Self::Oiq | Self::Diq | Self::Drb | Self::Pss | Self::Reb => {
                Some(RatingCategory::Mental)
            }
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RatingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown rating key '{key}'")]
pub struct ParseRatingKeyError {
    key: String,
}

impl FromStr for RatingKey {
    type Err = ParseRatingKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRatingKeyError { key: s.to_owned() })
    }
}

/// Ratings of one player at one point in time.
///
/// Every value stays within `[MIN_RATING, MAX_RATING]`; height additionally
/// never exceeds [`HEIGHT_CEILING`].
///
/// # Example
///
/// ```
/// use hoopdev_engine::{RatingKey, RatingProfile};
///
/// let mut ratings = RatingProfile::uniform(40);
/// ratings.set(RatingKey::Tp, 75);
/// assert_eq!(ratings.get(RatingKey::Tp), 75);
/// assert_eq!(ratings.get(RatingKey::Ft), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RatingFields", into = "RatingFields")]
pub struct RatingProfile {
    values: [u8; RatingKey::LEN],
}

impl Default for RatingProfile {
    fn default() -> Self {
        Self::uniform(MIN_RATING)
    }
}

impl RatingProfile {
    /// Creates a profile with every rating set to `value` (saturated to the bound).
    #[must_use]
    pub fn uniform(value: u8) -> Self {
        Self {
            values: [value.min(MAX_RATING); RatingKey::LEN],
        }
    }

    /// Creates a profile by calling `f` once per key.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(RatingKey) -> u8,
    {
        let mut profile = Self::default();
        for key in RatingKey::ALL {
            profile.set(key, f(key));
        }
        profile
    }

    #[must_use]
    pub fn get(&self, key: RatingKey) -> u8 {
        self.values[key.index()]
    }

    /// Sets a rating, saturating it into its bound.
    pub fn set(&mut self, key: RatingKey, value: u8) {
        let ceiling = if key == RatingKey::Hgt {
            HEIGHT_CEILING
        } else {
            MAX_RATING
        };
        self.values[key.index()] = value.min(ceiling);
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatingKey, u8)> + '_ {
        RatingKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Ratings in [`RatingKey::ALL`] order, as used for regression rows.
    #[must_use]
    pub fn to_features(&self) -> Vec<f64> {
        self.values.iter().map(|&v| f64::from(v)).collect()
    }
}

impl Index<RatingKey> for RatingProfile {
    type Output = u8;

    fn index(&self, key: RatingKey) -> &Self::Output {
        &self.values[key.index()]
    }
}

/// Rounds a real-valued rating and saturates it into `[MIN_RATING, MAX_RATING]`.
///
/// ```
/// use hoopdev_engine::limit_rating;
///
/// assert_eq!(limit_rating(42.4), 42);
/// assert_eq!(limit_rating(-3.0), 0);
/// assert_eq!(limit_rating(140.0), 100);
/// ```
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn limit_rating(value: f64) -> u8 {
    if value.is_nan() {
        return MIN_RATING;
    }
    value
        .round()
        .clamp(f64::from(MIN_RATING), f64::from(MAX_RATING)) as u8
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RatingFields {
    hgt: u8,
    stre: u8,
    spd: u8,
    jmp: u8,
    endu: u8,
    ins: u8,
    dnk: u8,
    ft: u8,
    fg: u8,
    tp: u8,
    oiq: u8,
    diq: u8,
    drb: u8,
    pss: u8,
    reb: u8,
}

impl From<RatingFields> for RatingProfile {
    fn from(f: RatingFields) -> Self {
        let values = [
            f.hgt, f.stre, f.spd, f.jmp, f.endu, f.ins, f.dnk, f.ft, f.fg, f.tp, f.oiq, f.diq,
            f.drb, f.pss, f.reb,
        ];
        Self::from_fn(|key| values[key.index()])
    }
}

impl From<RatingProfile> for RatingFields {
    fn from(p: RatingProfile) -> Self {
        Self {
            hgt: p[RatingKey::Hgt],
            stre: p[RatingKey::Stre],
            spd: p[RatingKey::Spd],
            jmp: p[RatingKey::Jmp],
            endu: p[RatingKey::Endu],
            ins: p[RatingKey::Ins],
            dnk: p[RatingKey::Dnk],
            ft: p[RatingKey::Ft],
            fg: p[RatingKey::Fg],
            tp: p[RatingKey::Tp],
            oiq: p[RatingKey::Oiq],
            diq: p[RatingKey::Diq],
            drb: p[RatingKey::Drb],
            pss: p[RatingKey::Pss],
            reb: p[RatingKey::Reb],
        }
    }
}
