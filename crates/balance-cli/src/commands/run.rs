use std::path::Path;

use anyhow::Context;
use balance_core::Scenario;
use balance_engine::Balancer;
use tracing::warn;

use crate::Format;

/// Load the scenario, run one round, and render the result.
pub fn run(path: &str, extra_away: &[u32], format: Format) -> anyhow::Result<String> {
    let mut scenario = Scenario::from_file(Path::new(path))
        .with_context(|| format!("loading scenario {path}"))?;
    scenario.away.extend_from_slice(extra_away);

    let duplicate_reps = scenario.duplicate_rep_ids();
    if !duplicate_reps.is_empty() {
        warn!(ids = ?duplicate_reps, "duplicate rep ids in scenario");
    }
    let duplicate_customers = scenario.duplicate_customer_ids();
    if !duplicate_customers.is_empty() {
        warn!(ids = ?duplicate_customers, "duplicate customer ids in scenario");
    }

    let outcome = Balancer::from_scenario(scenario).run();

    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&outcome)?),
        Format::Text => Ok(outcome.winner_id().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn text_output_is_winner_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "round.toml", &Scenario::scaffold().to_toml_string().unwrap());

        assert_eq!(run(&path, &[], Format::Text).unwrap(), "1");
    }

    #[test]
    fn extra_away_ids_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "round.toml",
            "rep_scores = [100, 99, 88, 3, 4, 5]\ncustomer_scores = [10, 10, 10, 20, 20, 30, 30, 30, 20, 60]\naway = [4]\n",
        );

        assert_eq!(run(&path, &[5, 6], Format::Text).unwrap(), "3");
    }

    #[test]
    fn json_output_contains_allocation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "round.json", r#"{"rep_scores": [1, 2], "customer_scores": [5]}"#);

        let output = run(&path, &[], Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(value["winner"].is_null());
        assert_eq!(value["allocation"].as_array().unwrap().len(), 2);
        assert_eq!(value["unassigned"], serde_json::json!([1]));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = run("/nonexistent/round.toml", &[], Format::Text).unwrap_err();
        assert!(format!("{err:#}").contains("loading scenario"));
    }
}
