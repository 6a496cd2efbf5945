//! Removes away reps from the candidate pool.

use std::collections::HashSet;

use balance_core::CustomerSuccessRep;

/// Return the reps whose id is not in `away`, preserving input order.
///
/// Ids in `away` that match no rep are ignored.
pub fn filter_available(reps: &[CustomerSuccessRep], away: &[u32]) -> Vec<CustomerSuccessRep> {
    if away.is_empty() {
        return reps.to_vec();
    }

    let away: HashSet<u32> = away.iter().copied().collect();
    reps.iter()
        .filter(|rep| !away.contains(&rep.id))
        .copied()
        .collect()
}
