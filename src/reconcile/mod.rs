//! Reconciliation subsystem.
//!
//! # Data Flow
//! ```text
//! chain read (fresh allowlist) + schedule evaluation (current minute)
//!     → plan.rs (set difference)
//!     → keeper.rs (pass orchestration, run modes, retry pacing)
//!     → submit subsystem (×0, 1, or 2 batched mutations)
//! ```
//!
//! # Design Decisions
//! - One pass in flight at any time; add and remove are sequenced
//! - The remove batch runs even when the add batch failed
//! - The loop is the single place pass errors become logged-and-continue

pub mod keeper;
pub mod plan;

pub use keeper::{AllowlistReader, Keeper, PassError};
pub use plan::{plan, ReconciliationPlan};
