//! Regression of player efficiency on ratings.

use hoopdev_engine::RatingKey;
use hoopdev_stats::{matrix::MatrixError, regression};
use serde::Serialize;

use crate::dataset::{DatasetError, DatasetFilter, HistoricalPlayer, RatingsPerDataset};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum RegressionError {
    #[display("failed to build dataset: {_0}")]
    Dataset(DatasetError),
    #[display("failed to solve least squares: {_0}")]
    Matrix(MatrixError),
}

/// Fitted weight of one rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingCoefficient {
    pub key: RatingKey,
    /// PER gained per rating point.
    pub coefficient: f64,
}

impl RatingCoefficient {
    /// PER gained per hundred rating points, the scale reports are read in.
    #[must_use]
    pub fn per_hundred(&self) -> f64 {
        self.coefficient * 100.0
    }
}

/// Least-squares weights of every rating in predicting PER.
///
/// No intercept is fitted.
pub fn fit_ratings_per(
    data: &RatingsPerDataset,
) -> Result<Vec<RatingCoefficient>, RegressionError> {
    let coefs = regression::fit(&data.feature_rows(), data.per())?;
    Ok(RatingsPerDataset::feature_labels()
        .into_iter()
        .zip(coefs)
        .map(|(key, coefficient)| RatingCoefficient { key, coefficient })
        .collect())
}

/// Builds the dataset from raw records and fits it.
pub fn regress_ratings_per(
    players: &[HistoricalPlayer],
    filter: &DatasetFilter,
) -> Result<Vec<RatingCoefficient>, RegressionError> {
    let data = RatingsPerDataset::build(players, filter)?;
    log::info!("regressing PER on ratings over {} player seasons", data.len());
    fit_ratings_per(&data)
}
