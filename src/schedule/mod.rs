//! Schedule subsystem.
//!
//! # Data Flow
//! ```text
//! schedule file (TOML)
//!     → loader.rs (parse, minute truncation, address typing)
//!     → Vec<ScheduleEntry> (immutable for the process lifetime)
//!     → evaluator.rs (active set at a given minute)
//! ```
//!
//! # Design Decisions
//! - Entries are loaded once at startup and never reloaded
//! - An entry is active on the half-open interval [start, end)
//! - Inverted intervals are kept but warned about; they never match

pub mod evaluator;
pub mod loader;
pub mod types;

pub use evaluator::scheduled_addresses;
pub use types::ScheduleEntry;
