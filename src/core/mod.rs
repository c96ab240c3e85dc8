//! Core logic: exam model, grading, aggregation, and results persistence.

pub mod app;
pub mod config;
pub mod exam;
pub mod grading;
pub mod paths;
pub mod results;
pub mod stats;
pub mod video;
