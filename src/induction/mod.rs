// public modules
pub mod config;
pub mod engine;

// private modules
mod setters;

pub use config::{ConfigIO, InductionConfig};
pub use engine::{select_attribute, TreeInductionEngine};
