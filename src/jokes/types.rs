//! Joke payloads as received from upstream and as returned to callers.

use serde::{Deserialize, Serialize};

use crate::jokes::transform::transform;

/// A joke as returned by the upstream API.
///
/// Only the fields the service passes on are kept. A missing `value` or
/// `categories` reads as empty; an explicit `null` is kept as `None` and
/// passed through to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamJoke {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "empty_value")]
    pub value: Option<String>,
    #[serde(default = "empty_categories")]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn empty_value() -> Option<String> {
    Some(String::new())
}

fn empty_categories() -> Option<Vec<String>> {
    Some(Vec::new())
}

/// Route-dependent part of a [`TransformedJoke`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JokeScope {
    /// Uncategorized routes carry the upstream categories as-is.
    Random { categories: Option<Vec<String>> },
    /// Category routes echo the requested category instead.
    Category { category: String },
}

/// A joke with the mascot substituted in, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformedJoke {
    pub id: Option<String>,
    pub joke: Option<String>,
    #[serde(flatten)]
    pub scope: JokeScope,
    pub mascot: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl TransformedJoke {
    /// Build the response for an uncategorized request.
    pub fn random(mut joke: UpstreamJoke, mascot: &str) -> Self {
        let categories = joke.categories.take();
        Self::with_scope(joke, JokeScope::Random { categories }, mascot)
    }

    /// Build the response for a request made against `category`.
    pub fn in_category(joke: UpstreamJoke, category: &str, mascot: &str) -> Self {
        let scope = JokeScope::Category {
            category: category.to_string(),
        };
        Self::with_scope(joke, scope, mascot)
    }

    fn with_scope(joke: UpstreamJoke, scope: JokeScope, mascot: &str) -> Self {
        Self {
            id: joke.id,
            joke: joke.value.map(|text| transform(&text, mascot)),
            scope,
            mascot: mascot.to_string(),
            created_at: joke.created_at,
            updated_at: joke.updated_at,
        }
    }
}

/// Body of `GET /jokes/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
    pub total: usize,
}

impl From<Vec<String>> for CategoryList {
    fn from(categories: Vec<String>) -> Self {
        Self {
            total: categories.len(),
            categories,
        }
    }
}
