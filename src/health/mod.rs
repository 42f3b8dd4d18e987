//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! GET /health
//!     → active.rs (probe upstream categories listing)
//!     → state.rs (classify: healthy / degraded / unhealthy)
//!     → always 200 with the classification
//! ```
//!
//! # Design Decisions
//! - Checks run per request; no background monitor, no cached state
//! - Failures are logged and folded into the status field

pub mod active;
pub mod state;

pub use active::check_upstream;
pub use state::{ExternalApiState, HealthReport, HealthStatus};
