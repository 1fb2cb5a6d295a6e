pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod runner;
pub mod summarizers;

pub use config::{InsightsConfig, MissingCounts};
pub use error::InsightsError;
pub use runner::{Report, run};
