// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Pokemon, PokemonDetail, StatValue, UserAccount};

// ============================================================================
// POKEDEX DTOs
// ============================================================================

/// One grid card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonCardDto {
    pub id: u32,
    pub name: String,
    /// Zero-padded dex number, e.g. "#0025"
    pub number: String,
    pub image_url: String,
    pub types: Vec<String>,
}

impl From<Pokemon> for PokemonCardDto {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: capitalize(&pokemon.name),
            number: format_dex_number(pokemon.id),
            image_url: pokemon.image_url,
            types: pokemon.types,
        }
    }
}

/// The grid plus the load-more button state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokedexViewDto {
    pub cards: Vec<PokemonCardDto>,
    pub exhausted: bool,
    pub sort_mode: String,
    pub type_filter: Option<String>,
}

// ============================================================================
// PROFILE / COMPARISON DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatDto {
    pub name: String,
    pub value: i32,
}

impl From<StatValue> for StatDto {
    fn from(stat: StatValue) -> Self {
        Self {
            name: capitalize(&stat.name),
            value: stat.value,
        }
    }
}

/// Detail page card; also one comparator slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonProfileDto {
    pub id: u32,
    pub name: String,
    pub number: String,
    pub image_url: String,
    pub types: Vec<String>,
    /// Metres / kilograms, converted from the API's raw units
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<String>,
    pub stats: Vec<StatDto>,
    pub flavor_text: Option<String>,
}

impl From<PokemonDetail> for PokemonProfileDto {
    fn from(detail: PokemonDetail) -> Self {
        Self {
            id: detail.pokemon.id,
            name: capitalize(&detail.pokemon.name),
            number: format_dex_number(detail.pokemon.id),
            image_url: detail.pokemon.image_url,
            types: detail.pokemon.types,
            height_m: f64::from(detail.height_dm) / 10.0,
            weight_kg: f64::from(detail.weight_hg) / 10.0,
            abilities: detail.abilities,
            stats: detail.stats.into_iter().map(StatDto::from).collect(),
            flavor_text: detail.flavor_text,
        }
    }
}

// ============================================================================
// ACCOUNT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// The password never crosses the UI boundary outwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub email: String,
    pub username: String,
}

impl From<UserAccount> for UserDto {
    fn from(account: UserAccount) -> Self {
        Self {
            email: account.email,
            username: account.username,
        }
    }
}

// ============================================================================
// FORMATTING HELPERS
// ============================================================================

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn format_dex_number(id: u32) -> String {
    format!("#{:04}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_dto_formats_name_and_number() {
        let pokemon = Pokemon {
            id: 25,
            name: "pikachu".to_string(),
            image_url: "https://img/25.gif".to_string(),
            types: vec!["electric".to_string()],
        };

        let dto = PokemonCardDto::from(pokemon);
        assert_eq!(dto.name, "Pikachu");
        assert_eq!(dto.number, "#0025");
    }

    #[test]
    fn test_profile_dto_converts_units() {
        let detail = PokemonDetail {
            pokemon: Pokemon {
                id: 9,
                name: "blastoise".to_string(),
                image_url: "https://img/9.png".to_string(),
                types: vec!["water".to_string()],
            },
            height_dm: 16,
            weight_hg: 855,
            abilities: vec!["torrent".to_string()],
            stats: vec![StatValue {
                name: "hp".to_string(),
                value: 79,
            }],
            flavor_text: None,
        };

        let dto = PokemonProfileDto::from(detail);
        assert!((dto.height_m - 1.6).abs() < f64::EPSILON);
        assert!((dto.weight_kg - 85.5).abs() < f64::EPSILON);
        assert_eq!(dto.stats[0].name, "Hp");
    }

    #[test]
    fn test_user_dto_drops_password() {
        let account = UserAccount::new(
            "ash@example.com".to_string(),
            "ash".to_string(),
            "pikachu".to_string(),
        );
        let json = serde_json::to_string(&UserDto::from(account)).unwrap();
        assert!(!json.contains("pikachu"));
    }
}
