//! Upstream joke API subsystem.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → client.rs (GET {base}/random | /random?category= | /categories)
//!     → reqwest with per-call timeout
//!     → UpstreamJoke / Vec<String>  or  UpstreamError (types.rs)
//! ```
//!
//! # Design Decisions
//! - One shared client for the process lifetime
//! - No retries: a failure is reported to the caller immediately
//! - Failure causes are logged here, not returned to HTTP callers

pub mod client;
pub mod types;

pub use client::JokeClient;
pub use types::{UpstreamError, UpstreamResult};
