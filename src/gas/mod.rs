//! Gas fee oracle subsystem.
//!
//! # Data Flow
//! ```text
//! fee station HTTP endpoint (JSON)
//!     → station.rs (fetch & decode)
//!     → types.rs (tier selection, error surfacing)
//!     → FeeSnapshot (priority fee + base fee for one instant)
//! ```
//!
//! # Design Decisions
//! - Fees are fetched fresh for every use; no caching, so the cost gate
//!   never decides on stale data older than one pass step
//! - A response carrying an error body or missing the configured tier is
//!   an explicit error, not a silent default

pub mod station;
pub mod types;

pub use station::GasOracle;
pub use types::{FeeSnapshot, GasError, PriorityTier};
