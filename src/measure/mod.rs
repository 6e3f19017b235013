//! Measurement of the rendered tooltip box

pub mod tracker;

pub use tracker::{MeasuredBox, Measurement, MeasurementTracker};
