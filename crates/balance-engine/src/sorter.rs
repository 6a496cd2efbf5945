//! Canonical ascending-by-score ordering.
//!
//! Both sorts are stable: reps or customers with equal scores keep their
//! input order, so input order is the deterministic tie-break. The
//! allocator relies on the customer order being ascending.

use balance_core::{Customer, CustomerSuccessRep};

pub fn sort_reps(reps: &mut [CustomerSuccessRep]) {
    reps.sort_by_key(|rep| rep.score);
}

pub fn sort_customers(customers: &mut [Customer]) {
    customers.sort_by_key(|customer| customer.score);
}
