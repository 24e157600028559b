use serde::{Deserialize, Serialize};

/// A single catalog entry, as shown on a card in the Pokédex grid.
/// Normalized from the remote document once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number assigned by the remote catalog
    pub id: u32,

    /// Canonical name, lowercase as delivered by the API
    pub name: String,

    /// Display image resolved through the sprite precedence chain
    pub image_url: String,

    /// One or two type tags, lowercase, primary type first
    pub types: Vec<String>,
}

impl Pokemon {
    /// True when the entry carries the given type tag
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// One base stat as reported by the remote catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: i32,
}

/// Full record for the detail page and the comparator.
/// Height and weight are kept in the API's raw units (decimetres and
/// hectograms); presentation layers divide by ten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub pokemon: Pokemon,

    pub height_dm: u32,
    pub weight_hg: u32,

    pub abilities: Vec<String>,
    pub stats: Vec<StatValue>,

    /// Species flavor text in the preferred language, when available
    pub flavor_text: Option<String>,
}
