//! Calibration tooling for the development engine.
//!
//! - [`career`]: synthetic career sampling and its distribution views
//! - [`dataset`]: historical records and their (ratings, PER) projection
//! - [`regression`]: least-squares weights of ratings on PER
//! - [`league`]: rating distributions across a league roster
//!
//! Everything here is diagnostic. Nothing feeds back into a live league.

pub mod career;
pub mod dataset;
pub mod league;
pub mod regression;
