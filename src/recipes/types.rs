//! Recipe data types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name.
    pub name: String,
    /// Any other fields supplied by the client, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ingredient {
    /// Create an ingredient with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A recipe record.
///
/// The store never inspects these fields; anything beyond `name` and
/// `ingredients` rides along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name. The identifier is derived from it on create.
    pub name: String,
    /// Ingredients in the order given.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Opaque passthrough fields (instructions, servings, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Create a recipe from a name and ingredient names.
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Ingredient::new).collect(),
            extra: Map::new(),
        }
    }

    /// Whether an ingredient with the given name is present.
    pub fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|i| i.name == name)
    }
}
