// src/integrations/pokeapi/client.rs
//
// PokeAPI REST Integration
//
// ARCHITECTURE:
// - Plain REST client over the public PokeAPI endpoints
// - Maps external documents -> domain records (NO domain mutation)
// - Used by the pokedex, profile and comparison services
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - The remote JSON shape is consumed as-is; normalization happens here
// - Failures map to AppError kinds; nothing in this module panics

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::{validate_pokemon, Pokemon, PokemonDetail, StatValue};
use crate::error::{AppError, AppResult};

/// Public PokeAPI root
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Shown when every sprite field in a document is absent or blank
pub const FALLBACK_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/0.png";

/// Used when the count endpoint cannot be reached
pub const DEFAULT_TOTAL_COUNT: u32 = 898;

/// Flavor text language looked up on the species endpoint
const DEFAULT_FLAVOR_LANGUAGE: &str = "pt";

/// What the services need from the remote catalog.
/// The reqwest client implements it; tests substitute an in-memory fake.
#[async_trait]
pub trait PokemonCatalog: Send + Sync {
    /// One normalized card record by id or name (case-insensitive, trimmed)
    async fn fetch_pokemon(&self, identifier: &str) -> AppResult<Pokemon>;

    /// Full record for the detail page and the comparator
    async fn fetch_detail(&self, identifier: &str) -> AppResult<PokemonDetail>;

    /// Total number of catalog entries. Infallible: falls back to
    /// DEFAULT_TOTAL_COUNT when the endpoint cannot be reached.
    async fn total_count(&self) -> u32;
}

// ============================================================================
// RAW DOCUMENTS (remote JSON shape)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PokemonData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: SpritesData,
    #[serde(default)]
    pub types: Vec<TypeSlotData>,
    #[serde(default)]
    pub stats: Vec<StatSlotData>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlotData>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpritesData {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSpritesData>,
    #[serde(default)]
    pub versions: Option<VersionsData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSpritesData {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtworkData {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VersionsData {
    #[serde(rename = "generation-v", default)]
    pub generation_v: Option<GenerationVData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerationVData {
    #[serde(rename = "black-white", default)]
    pub black_white: Option<BlackWhiteData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BlackWhiteData {
    #[serde(default)]
    pub animated: Option<AnimatedData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimatedData {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlotData {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlotData {
    pub base_stat: i32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlotData {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CountData {
    count: u32,
}

#[derive(Debug, Deserialize)]
struct SpeciesData {
    #[serde(default)]
    flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: NamedResource,
}

// ============================================================================
// CLIENT
// ============================================================================

/// PokeAPI client
pub struct PokeApiClient {
    base_url: String,
    http_client: Client,
    flavor_language: String,
}

impl PokeApiClient {
    pub fn new() -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: POKEAPI_BASE_URL.to_string(),
            http_client,
            flavor_language: DEFAULT_FLAVOR_LANGUAGE.to_string(),
        }
    }

    /// Point the client at a different API root (tests, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut client = Self::new();
        client.base_url = base_url.into();
        client
    }

    /// Prefer another species flavor text language
    pub fn with_flavor_language(mut self, language: impl Into<String>) -> Self {
        self.flavor_language = language.into();
        self
    }

    /// Lowercase + trim; an identifier that is empty afterwards never
    /// reaches the network
    fn normalize_identifier(identifier: &str) -> AppResult<String> {
        let normalized = identifier.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AppError::Validation(
                "Identifier cannot be empty".to_string(),
            ));
        }
        Ok(normalized)
    }

    async fn fetch_document(&self, identifier: &str) -> AppResult<PokemonData> {
        let normalized = Self::normalize_identifier(identifier)?;
        let url = format!("{}/pokemon/{}", self.base_url, normalized);

        let response = self.http_client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }
        if !response.status().is_success() {
            return Err(AppError::Transport(format!(
                "PokeAPI returned status {} for {}",
                response.status(),
                normalized
            )));
        }

        let data: PokemonData = response.json().await?;
        Ok(data)
    }

    /// Flavor text for the species page. Degrades to None on any failure;
    /// the detail record is still usable without it.
    async fn fetch_flavor_text(&self, id: u32) -> Option<String> {
        let url = format!("{}/pokemon-species/{}", self.base_url, id);

        let response = match self.http_client.get(&url).send().await {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                log::warn!("species lookup for {} returned status {}", id, r.status());
                return None;
            }
            Err(e) => {
                log::warn!("species lookup for {} failed: {}", id, e);
                return None;
            }
        };

        let species: SpeciesData = match response.json().await {
            Ok(s) => s,
            Err(e) => {
                log::warn!("species document for {} did not parse: {}", id, e);
                return None;
            }
        };

        species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == self.flavor_language)
            .map(|entry| clean_flavor_text(&entry.flavor_text))
    }

    // ========================================================================
    // MAPPING
    // ========================================================================

    fn map_pokemon(data: &PokemonData) -> AppResult<Pokemon> {
        let pokemon = Pokemon {
            id: data.id,
            name: data.name.clone(),
            image_url: choose_image(&data.sprites),
            types: data.types.iter().map(|t| t.type_ref.name.clone()).collect(),
        };

        validate_pokemon(&pokemon).map_err(AppError::Domain)?;
        Ok(pokemon)
    }

    fn map_detail(data: &PokemonData, flavor_text: Option<String>) -> AppResult<PokemonDetail> {
        Ok(PokemonDetail {
            pokemon: Self::map_pokemon(data)?,
            height_dm: data.height,
            weight_hg: data.weight,
            abilities: data.abilities.iter().map(|a| a.ability.name.clone()).collect(),
            stats: data
                .stats
                .iter()
                .map(|s| StatValue {
                    name: s.stat.name.clone(),
                    value: s.base_stat,
                })
                .collect(),
            flavor_text,
        })
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PokemonCatalog for PokeApiClient {
    async fn fetch_pokemon(&self, identifier: &str) -> AppResult<Pokemon> {
        let data = self.fetch_document(identifier).await?;
        Self::map_pokemon(&data)
    }

    async fn fetch_detail(&self, identifier: &str) -> AppResult<PokemonDetail> {
        let data = self.fetch_document(identifier).await?;
        let flavor_text = self.fetch_flavor_text(data.id).await;
        Self::map_detail(&data, flavor_text)
    }

    async fn total_count(&self) -> u32 {
        let url = format!("{}/pokemon?limit=1", self.base_url);

        let count = async {
            let response = self.http_client.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(AppError::Transport(format!(
                    "count endpoint returned status {}",
                    response.status()
                )));
            }
            let data: CountData = response.json().await?;
            Ok::<u32, AppError>(data.count)
        }
        .await;

        match count {
            Ok(count) => count,
            Err(e) => {
                log::warn!("total count lookup failed, using fallback: {}", e);
                DEFAULT_TOTAL_COUNT
            }
        }
    }
}

/// Sprite precedence: animated front -> animated shiny -> official artwork
/// -> static front -> static shiny -> fallback constant. Blank strings count
/// as absent.
fn choose_image(sprites: &SpritesData) -> String {
    let animated = sprites
        .versions
        .as_ref()
        .and_then(|v| v.generation_v.as_ref())
        .and_then(|g| g.black_white.as_ref())
        .and_then(|bw| bw.animated.as_ref());

    let candidates = [
        animated.and_then(|a| a.front_default.as_deref()),
        animated.and_then(|a| a.front_shiny.as_deref()),
        sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|art| art.front_default.as_deref()),
        sprites.front_default.as_deref(),
        sprites.front_shiny.as_deref(),
    ];

    candidates
        .iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .map(|url| url.to_string())
        .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string())
}

/// Species flavor text embeds newlines and form feeds mid-sentence
fn clean_flavor_text(raw: &str) -> String {
    raw.replace('\n', " ").replace('\u{c}', " ")
}
