use serde::{Deserialize, Deserializer, Serialize};

use crate::model::product::Product;

/// Envelope returned by every products endpoint except id verification.
///
/// The outcome of a write is signalled only through `message`, which callers
/// compare against the literals in [`crate::constants::responses`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub data: Vec<Product>,
}

impl ApiResponse {
    pub fn new(message: impl Into<String>, data: Vec<Product>) -> Self {
        Self {
            name: String::new(),
            message: message.into(),
            data,
        }
    }
}

/// Create and update reply with the affected product alone, the listing
/// replies with an array; both end up as a `Vec`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Product>),
        One(Box<Product>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(products) => products,
        OneOrMany::One(product) => vec![*product],
        OneOrMany::Nothing(()) => Vec::new(),
    })
}
