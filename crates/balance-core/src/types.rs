//! Shared types used across the balancing crates.

use serde::{Deserialize, Serialize};

/// Integer result meaning "no winner": a draw, or no rep survived.
pub const NO_WINNER: u32 = 0;

/// A customer success representative and the score they can serve up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerSuccessRep {
    pub id: u32,
    pub score: u32,
}

impl CustomerSuccessRep {
    pub fn new(id: u32, score: u32) -> Self {
        Self { id, score }
    }

    /// Whether this rep's score covers the given customer.
    pub fn can_serve(&self, customer: &Customer) -> bool {
        customer.score <= self.score
    }
}

/// A customer waiting to be assigned to a rep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub score: u32,
}

impl Customer {
    pub fn new(id: u32, score: u32) -> Self {
        Self { id, score }
    }
}

/// The customers claimed by one surviving rep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub rep_id: u32,
    pub rep_score: u32,
    /// Claimed customer ids, in ascending score order.
    pub customer_ids: Vec<u32>,
}

impl AllocationEntry {
    pub fn new(rep: &CustomerSuccessRep) -> Self {
        Self {
            rep_id: rep.id,
            rep_score: rep.score,
            customer_ids: Vec::new(),
        }
    }

    pub fn customer_count(&self) -> usize {
        self.customer_ids.len()
    }
}

/// Build reps from a list of scores, numbering them 1..=N by position.
pub fn reps_from_scores(scores: &[u32]) -> Vec<CustomerSuccessRep> {
    numbered(scores, 0)
        .map(|(id, score)| CustomerSuccessRep { id, score })
        .collect()
}

/// Build customers from a list of scores, numbering them 1..=N by position.
pub fn customers_from_scores(scores: &[u32]) -> Vec<Customer> {
    numbered(scores, 0)
        .map(|(id, score)| Customer { id, score })
        .collect()
}

/// Pair each score with a 1-based id, starting after `offset`.
pub(crate) fn numbered(scores: &[u32], offset: usize) -> impl Iterator<Item = (u32, u32)> + '_ {
    scores
        .iter()
        .enumerate()
        .map(move |(i, &score)| ((offset + i + 1) as u32, score))
}
