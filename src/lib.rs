//! Calculates the next production and beta versions for a release.
//!
//! The [`versionning`] module holds the version model and the calculation
//! itself; [`action`] wraps it as a GitHub Action style step.

pub mod action;
pub mod cli;
pub mod logging;
pub mod utils;
pub mod versionning;
