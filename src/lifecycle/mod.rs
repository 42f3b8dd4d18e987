//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply CLI overrides → Validate
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Close upstream client
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then upstream client, then listener
//! - Ordered shutdown: stop accept, drain, release shared resources

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
