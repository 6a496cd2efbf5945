//! Allocation engine: greedy, score-bounded claiming of customers.
//!
//! Reps are walked in ascending score order. Each rep claims every
//! unclaimed customer whose score does not exceed its own. Because the
//! customers are also sorted ascending, the unclaimed pool is always a
//! suffix of the sorted slice, so it is tracked as a single cursor and
//! nothing is ever removed from the backing sequence. Each rep's scan stops
//! at the first customer it cannot serve, which keeps a round linear in
//! `reps + customers` after sorting.

use balance_core::{AllocationEntry, Customer, CustomerSuccessRep};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of one allocation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// One entry per rep, in the order the reps were processed.
    pub entries: Vec<AllocationEntry>,
    /// Customers whose score exceeds every rep's score.
    pub unassigned: Vec<u32>,
}

/// Assign customers to reps.
///
/// Both slices must already be sorted ascending by score (see
/// [`crate::sorter`]). A rep that claims nothing still gets an entry.
pub fn allocate(reps: &[CustomerSuccessRep], customers: &[Customer]) -> Allocation {
    debug_assert!(reps.is_sorted_by_key(|r| r.score), "reps must be sorted by score");
    debug_assert!(
        customers.is_sorted_by_key(|c| c.score),
        "customers must be sorted by score"
    );

    // Index of the first unclaimed customer.
    let mut next = 0;
    let mut entries = Vec::with_capacity(reps.len());

    for rep in reps {
        let pool = &customers[next..];
        let claimed = pool.iter().take_while(|c| rep.can_serve(c)).count();

        let mut entry = AllocationEntry::new(rep);
        entry.customer_ids = pool[..claimed].iter().map(|c| c.id).collect();
        next += claimed;

        debug!(
            rep = rep.id,
            score = rep.score,
            claimed,
            remaining = customers.len() - next,
            "rep claimed customers"
        );
        entries.push(entry);
    }

    let unassigned: Vec<u32> = customers[next..].iter().map(|c| c.id).collect();
    if !unassigned.is_empty() {
        warn!(
            count = unassigned.len(),
            "customers left unassigned: score exceeds every available rep"
        );
    }

    Allocation {
        entries,
        unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balance_core::{customers_from_scores, reps_from_scores};

    use crate::sorter::{sort_customers, sort_reps};

    fn sorted(rep_scores: &[u32], customer_scores: &[u32]) -> (Vec<CustomerSuccessRep>, Vec<Customer>) {
        let mut reps = reps_from_scores(rep_scores);
        let mut customers = customers_from_scores(customer_scores);
        sort_reps(&mut reps);
        sort_customers(&mut customers);
        (reps, customers)
    }

    fn claims(allocation: &Allocation) -> Vec<(u32, Vec<u32>)> {
        allocation
            .entries
            .iter()
            .map(|e| (e.rep_id, e.customer_ids.clone()))
            .collect()
    }

    #[test]
    fn lowest_sufficient_rep_claims_first() {
        // Reps 1 (60) and 3 (95); customers by score 10, 20, 40, 60, 70, 90.
        let reps = vec![CustomerSuccessRep::new(1, 60), CustomerSuccessRep::new(3, 95)];
        let (_, customers) = sorted(&[], &[90, 20, 70, 40, 60, 10]);

        let allocation = allocate(&reps, &customers);

        assert_eq!(
            claims(&allocation),
            vec![(1, vec![6, 2, 4, 5]), (3, vec![3, 1])]
        );
        assert!(allocation.unassigned.is_empty());
    }

    #[test]
    fn rep_with_no_eligible_customers_gets_empty_entry() {
        let (reps, customers) = sorted(&[5, 50], &[10, 20]);

        let allocation = allocate(&reps, &customers);

        assert_eq!(claims(&allocation), vec![(1, vec![]), (2, vec![1, 2])]);
    }

    #[test]
    fn customers_above_every_rep_are_unassigned() {
        let (reps, customers) = sorted(&[11, 21, 31], &[10, 30, 60, 20]);

        let allocation = allocate(&reps, &customers);

        assert_eq!(claims(&allocation), vec![(1, vec![1]), (2, vec![4]), (3, vec![2])]);
        assert_eq!(allocation.unassigned, vec![3]);
    }

    #[test]
    fn score_equal_to_rep_is_claimed() {
        let (reps, customers) = sorted(&[20], &[20]);
        let allocation = allocate(&reps, &customers);
        assert_eq!(claims(&allocation), vec![(1, vec![1])]);
    }

    #[test]
    fn equal_score_reps_first_in_order_takes_all() {
        let (reps, customers) = sorted(&[3, 3], &[1, 2, 3]);

        let allocation = allocate(&reps, &customers);

        assert_eq!(claims(&allocation), vec![(1, vec![1, 2, 3]), (2, vec![])]);
    }

    #[test]
    fn no_reps_yields_no_entries() {
        let (reps, customers) = sorted(&[], &[10, 20]);

        let allocation = allocate(&reps, &customers);

        assert!(allocation.entries.is_empty());
        assert_eq!(allocation.unassigned, vec![1, 2]);
    }

    #[test]
    fn no_customers_yields_empty_entries() {
        let (reps, customers) = sorted(&[10, 20], &[]);

        let allocation = allocate(&reps, &customers);

        assert_eq!(allocation.entries.len(), 2);
        assert!(allocation.entries.iter().all(|e| e.customer_ids.is_empty()));
        assert!(allocation.unassigned.is_empty());
    }
}
