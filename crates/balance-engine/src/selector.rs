//! Winner selection.
//!
//! Entries are ranked by claimed-customer count, highest first, and only
//! the top two are compared. Equal counts at the top are a draw, including
//! a draw at zero. A lone entry wins unconditionally.

use std::cmp::Reverse;

use balance_core::AllocationEntry;
use tracing::info;

/// Rank entries by customer count, descending.
///
/// The sort is stable, so entries with equal counts keep allocation order.
pub fn rank_entries(entries: &[AllocationEntry]) -> Vec<&AllocationEntry> {
    let mut ranked: Vec<&AllocationEntry> = entries.iter().collect();
    ranked.sort_by_key(|entry| Reverse(entry.customer_count()));
    ranked
}

/// Pick the rep serving the most customers, or `None` on a draw or when
/// there are no entries.
pub fn select_winner(entries: &[AllocationEntry]) -> Option<u32> {
    let ranked = rank_entries(entries);

    let winner = match ranked.as_slice() {
        [] => None,
        [only] => Some(*only),
        [first, second, ..] if first.customer_count() == second.customer_count() => {
            info!(
                count = first.customer_count(),
                first = first.rep_id,
                second = second.rep_id,
                "draw between top reps"
            );
            None
        }
        [first, ..] => Some(*first),
    };

    winner.map(|entry| {
        info!(rep = entry.rep_id, count = entry.customer_count(), "winner selected");
        entry.rep_id
    })
}
