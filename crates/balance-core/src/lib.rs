pub mod config;
pub mod error;
pub mod types;

pub use config::Scenario;
pub use error::{ScenarioError, ScenarioResult};
pub use types::*;
