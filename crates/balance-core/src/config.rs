//! Scenario file parser.
//!
//! A scenario holds everything one balancing round needs: the reps, the
//! customers, and the ids of reps who are away. Files are TOML by default,
//! or JSON when the path ends in `.json`.
//!
//! ```toml
//! away = [2, 4]
//!
//! [[reps]]
//! id = 1
//! score = 60
//!
//! [[customers]]
//! id = 1
//! score = 90
//! ```
//!
//! Reps and customers may also be written as bare score lists
//! (`rep_scores = [60, 20, 95]`), in which case ids are assigned by
//! position, continuing after any explicit entries.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};
use crate::types::{Customer, CustomerSuccessRep, numbered};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScenarioFile")]
pub struct Scenario {
    /// Ids of reps excluded from this round.
    pub away: Vec<u32>,
    pub reps: Vec<CustomerSuccessRep>,
    pub customers: Vec<Customer>,
}

/// On-disk shape, before shorthand score lists are expanded.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    away: Vec<u32>,
    #[serde(default)]
    reps: Vec<CustomerSuccessRep>,
    #[serde(default)]
    rep_scores: Vec<u32>,
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    customer_scores: Vec<u32>,
}

impl From<ScenarioFile> for Scenario {
    fn from(file: ScenarioFile) -> Self {
        let mut reps = file.reps;
        let offset = reps.len();
        reps.extend(
            numbered(&file.rep_scores, offset).map(|(id, score)| CustomerSuccessRep { id, score }),
        );

        let mut customers = file.customers;
        let offset = customers.len();
        customers.extend(
            numbered(&file.customer_scores, offset).map(|(id, score)| Customer { id, score }),
        );

        Scenario {
            away: file.away,
            reps,
            customers,
        }
    }
}

impl Scenario {
    pub fn new(reps: Vec<CustomerSuccessRep>, customers: Vec<Customer>, away: Vec<u32>) -> Self {
        Self {
            away,
            reps,
            customers,
        }
    }

    /// Load a scenario, picking the format from the file extension.
    pub fn from_file(path: &Path) -> ScenarioResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") | None => Self::from_toml_str(&content),
            Some(other) => Err(ScenarioError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_toml_str(content: &str) -> ScenarioResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> ScenarioResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rep ids that appear more than once, in first-repeat order.
    pub fn duplicate_rep_ids(&self) -> Vec<u32> {
        duplicates(self.reps.iter().map(|r| r.id))
    }

    /// Customer ids that appear more than once, in first-repeat order.
    pub fn duplicate_customer_ids(&self) -> Vec<u32> {
        duplicates(self.customers.iter().map(|c| c.id))
    }

    /// The reference fixture: four reps, six customers, reps 2 and 4 away.
    pub fn scaffold() -> Self {
        Scenario {
            away: vec![2, 4],
            reps: vec![
                CustomerSuccessRep::new(1, 60),
                CustomerSuccessRep::new(2, 20),
                CustomerSuccessRep::new(3, 95),
                CustomerSuccessRep::new(4, 75),
            ],
            customers: vec![
                Customer::new(1, 90),
                Customer::new(2, 20),
                Customer::new(3, 70),
                Customer::new(4, 40),
                Customer::new(5, 60),
                Customer::new(6, 10),
            ],
        }
    }
}

fn duplicates(ids: impl Iterator<Item = u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}
