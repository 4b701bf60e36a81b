//! Statistics and linear algebra for the calibration tooling.
//!
//! - [`descriptive`]: mean, median, variance and friends
//! - [`percentiles`]: exact-element percentiles and [`FiveNumberSummary`]
//! - [`matrix`]: dense matrices with Gauss-Jordan inversion
//! - [`regression`]: ordinary least squares on top of [`matrix`]
//!
//! # Examples
//!
//! ## Summarizing a distribution
//!
//! ```
//! use hoopdev_stats::percentiles::FiveNumberSummary;
//!
//! let summary = FiveNumberSummary::new([61u8, 74, 55, 80, 68]).unwrap();
//! assert_eq!(summary.median, 68);
//! ```
//!
//! ## Fitting a linear model
//!
//! ```
//! use hoopdev_stats::regression::fit;
//!
//! let rows = [[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let coefs = fit(&rows, &[3.0, 5.0, 7.0]).unwrap();
//! assert!((coefs[0] - 1.0).abs() < 1e-9);
//! assert!((coefs[1] - 2.0).abs() < 1e-9);
//! ```
//!
//! [`FiveNumberSummary`]: percentiles::FiveNumberSummary

pub mod descriptive;
pub mod matrix;
pub mod percentiles;
pub mod regression;
