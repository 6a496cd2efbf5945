//! Customer success balancing engine.
//!
//! Assigns customers to customer success reps in a single deterministic
//! pass and reports which rep ends up serving the most customers.
//!
//! # Pipeline
//!
//! ```text
//! reps ──► availability ──► sorter ──┐
//!                                    ├──► allocator ──► selector ──► winner id | 0
//! customers ────────────► sorter ────┘
//! ```
//!
//! - **`availability`**: drops reps who are away this round
//! - **`sorter`**: stable ascending-by-score ordering of reps and customers
//! - **`allocator`**: greedy claim of customers by the lowest sufficient rep
//! - **`selector`**: top-two comparison, draw detection
//! - **`balancer`**: orchestration and the [`BalanceOutcome`] report

pub mod allocator;
pub mod availability;
pub mod balancer;
pub mod selector;
pub mod sorter;

pub use allocator::{Allocation, allocate};
pub use availability::filter_available;
pub use balancer::{BalanceOutcome, Balancer, execute};
pub use selector::select_winner;
pub use sorter::{sort_customers, sort_reps};
