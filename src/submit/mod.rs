//! Transaction submission subsystem.
//!
//! # Data Flow
//! ```text
//! address batch + mutation kind
//!     → submitter.rs (build → price → cost gate → sign → broadcast)
//!     → observer.rs (ordered lifecycle events)
//!     → SubmitOutcome (confirmed receipt, cost abort, or dry run)
//! ```
//!
//! # Design Decisions
//! - The cost gate re-queries the base fee so the abort decision is made
//!   on data no older than one step
//! - A cost abort is a success-typed outcome, not an error; the next pass
//!   retries when fees may have dropped
//! - Signing failures are fatal (misconfiguration); everything else is
//!   transient and retried by the next pass

pub mod observer;
pub mod submitter;
pub mod types;

pub use observer::{LogObserver, SubmitObserver, TxEvent};
pub use submitter::TxSubmitter;
pub use types::{MutationSubmitter, SubmitError, SubmitOutcome};
