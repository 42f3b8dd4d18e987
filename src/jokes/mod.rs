//! Joke shaping subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamJoke (types.rs, deserialized by the upstream client)
//!     → transform.rs (mascot substitution on `value`)
//!     → TransformedJoke (types.rs, serialized by handlers)
//!
//! mascot.rs: static catalog behind `/mascots` and `/`
//! ```
//!
//! # Design Decisions
//! - Transform is a pure function of (text, mascot)
//! - Mascot names are free-form; the catalog is not enforced
//! - Only three exact casings are substituted

pub mod mascot;
pub mod transform;
pub mod types;

pub use mascot::{MascotCatalog, MascotInfo, MASCOTS};
pub use transform::{transform, DEFAULT_MASCOT, WOOF_MASCOT};
pub use types::{CategoryList, JokeScope, TransformedJoke, UpstreamJoke};
