//! Meow Norris Joke API Library
//!
//! Fetches Chuck Norris jokes from an upstream API and swaps in an office
//! mascot's name before returning them.

pub mod config;
pub mod health;
pub mod http;
pub mod jokes;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use jokes::transform;
pub use lifecycle::Shutdown;
pub use upstream::JokeClient;
