//! Balancing round orchestration.
//!
//! Runs filter → sort → allocate → select over working copies of the
//! inputs. The caller's sequences are never touched, so a [`Balancer`] can
//! be run more than once with the same result.

use balance_core::{AllocationEntry, Customer, CustomerSuccessRep, NO_WINNER, Scenario};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::allocator::allocate;
use crate::availability::filter_available;
use crate::selector::select_winner;
use crate::sorter::{sort_customers, sort_reps};

/// Full report of one balancing round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceOutcome {
    /// The rep serving the most customers, `None` on a draw or when no rep
    /// was available.
    pub winner: Option<u32>,
    /// One entry per available rep, in ascending rep score order.
    pub allocation: Vec<AllocationEntry>,
    /// Customers no available rep could serve.
    pub unassigned: Vec<u32>,
}

impl BalanceOutcome {
    /// The winner as an integer, [`NO_WINNER`] (0) when there is none.
    pub fn winner_id(&self) -> u32 {
        self.winner.unwrap_or(NO_WINNER)
    }

    /// The allocation entry for a given rep, if that rep took part.
    pub fn entry_for(&self, rep_id: u32) -> Option<&AllocationEntry> {
        self.allocation.iter().find(|entry| entry.rep_id == rep_id)
    }
}

/// One balancing round over a fixed set of reps, customers and away ids.
#[derive(Debug, Clone)]
pub struct Balancer {
    reps: Vec<CustomerSuccessRep>,
    customers: Vec<Customer>,
    away: Vec<u32>,
}

impl Balancer {
    pub fn new(reps: Vec<CustomerSuccessRep>, customers: Vec<Customer>, away: Vec<u32>) -> Self {
        Self {
            reps,
            customers,
            away,
        }
    }

    pub fn from_scenario(scenario: Scenario) -> Self {
        Self::new(scenario.reps, scenario.customers, scenario.away)
    }

    /// Run the round and return the full report.
    pub fn run(&self) -> BalanceOutcome {
        let mut reps = filter_available(&self.reps, &self.away);
        if reps.is_empty() && !self.reps.is_empty() {
            warn!(reps = self.reps.len(), "every rep is away, no winner possible");
        }

        let mut customers = self.customers.clone();
        sort_reps(&mut reps);
        sort_customers(&mut customers);

        debug!(
            available = reps.len(),
            away = self.reps.len() - reps.len(),
            customers = customers.len(),
            "starting allocation"
        );

        let allocation = allocate(&reps, &customers);
        let winner = select_winner(&allocation.entries);

        BalanceOutcome {
            winner,
            allocation: allocation.entries,
            unassigned: allocation.unassigned,
        }
    }

    /// Run the round and return the winning rep id, or 0 for no winner.
    pub fn execute(&self) -> u32 {
        self.run().winner_id()
    }
}

/// Convenience wrapper: the winning rep id for the given inputs, or 0.
pub fn execute(reps: &[CustomerSuccessRep], customers: &[Customer], away: &[u32]) -> u32 {
    Balancer::new(reps.to_vec(), customers.to_vec(), away.to_vec()).execute()
}
