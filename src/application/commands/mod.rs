// src/application/commands/mod.rs
//
// Command Handlers - the UI boundary
//
// Commands accept DTOs, call services and hand DTOs back. Failures cross the
// boundary as serialized ErrorResponse strings for the UI's modal alerts.

pub mod auth_commands;
pub mod comparison_commands;
pub mod pokedex_commands;
pub mod profile_commands;

pub use auth_commands::*;
pub use comparison_commands::*;
pub use pokedex_commands::*;
pub use profile_commands::*;

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::Arc;

    use super::*;
    use crate::application::dto::{LoginDto, RegisterDto};
    use crate::application::state::AppState;
    use crate::db::{create_test_pool, initialize_database};
    use crate::domain::{Pokemon, PokemonDetail};
    use crate::error::{AppError, AppResult};
    use crate::events::EventBus;
    use crate::integrations::PokemonCatalog;
    use crate::repositories::{LocalStore, SqliteLocalStore};

    /// Generated catalog: ids 1..=total named species-NNN, odd ids grass and
    /// even ids water
    struct StubCatalog {
        total: u32,
    }

    impl StubCatalog {
        fn record(&self, id: u32) -> Pokemon {
            let type_tag = if id % 2 == 1 { "grass" } else { "water" };
            Pokemon {
                id,
                name: format!("species-{:03}", id),
                image_url: format!("https://img/{}.png", id),
                types: vec![type_tag.to_string()],
            }
        }
    }

    #[async_trait]
    impl PokemonCatalog for StubCatalog {
        async fn fetch_pokemon(&self, identifier: &str) -> AppResult<Pokemon> {
            (1..=self.total)
                .map(|id| self.record(id))
                .find(|p| p.id.to_string() == identifier || p.name == identifier)
                .ok_or(AppError::NotFound)
        }

        async fn fetch_detail(&self, identifier: &str) -> AppResult<PokemonDetail> {
            let pokemon = self.fetch_pokemon(identifier).await?;
            Ok(PokemonDetail {
                pokemon,
                height_dm: 10,
                weight_hg: 100,
                abilities: vec!["overgrow".to_string()],
                stats: Vec::new(),
                flavor_text: Some("A stub species.".to_string()),
            })
        }

        async fn total_count(&self) -> u32 {
            self.total
        }
    }

    fn test_state(total: u32) -> AppState {
        let pool = Arc::new(create_test_pool().unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        let store: Arc<dyn LocalStore> = Arc::new(SqliteLocalStore::new(pool));
        let catalog: Arc<dyn PokemonCatalog> = Arc::new(StubCatalog { total });
        AppState::with_components(store, catalog, Arc::new(EventBus::new()))
    }

    #[tokio::test]
    async fn test_pokedex_flow_through_commands() {
        let state = test_state(25);

        let view = load_initial_page(&state).await.unwrap();
        assert_eq!(view.cards.len(), 20);
        assert!(!view.exhausted);

        let view = load_more(&state).await.unwrap();
        assert_eq!(view.cards.len(), 25);
        assert!(view.exhausted);

        let view = set_sort_mode(&state, "id-desc".to_string()).await.unwrap();
        assert_eq!(view.cards[0].id, 25);
        assert_eq!(view.sort_mode, "id-desc");

        assert!(set_sort_mode(&state, "by-weight".to_string()).await.is_err());

        let view = toggle_type_filter(&state, "grass".to_string()).await.unwrap();
        assert!(view.cards.iter().all(|c| c.types.contains(&"grass".to_string())));

        let view = clear_type_filter(&state).await.unwrap();
        assert_eq!(view.cards.len(), 25);

        let view = search_pokemon(&state, "species-003".to_string())
            .await
            .unwrap();
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].name, "Species-003");
        assert_eq!(view.cards[0].number, "#0003");
    }

    #[tokio::test]
    async fn test_search_miss_yields_empty_grid() {
        let state = test_state(5);
        load_initial_page(&state).await.unwrap();

        let view = search_pokemon(&state, "missingno".to_string())
            .await
            .unwrap();
        assert!(view.cards.is_empty());
    }

    #[tokio::test]
    async fn test_auth_flow_through_commands() {
        let state = test_state(5);

        register_user(
            &state,
            RegisterDto {
                email: "ash@example.com".to_string(),
                username: "ash".to_string(),
                password: "pikachu".to_string(),
            },
        )
        .await
        .unwrap();

        let wrong = login_user(
            &state,
            LoginDto {
                username: "ash".to_string(),
                password: "raichu".to_string(),
            },
        )
        .await;
        assert!(wrong.unwrap_err().contains("validation"));

        let user = login_user(
            &state,
            LoginDto {
                username: "ash".to_string(),
                password: "pikachu".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(user.username, "ash");

        assert!(current_user(&state).await.unwrap().is_some());

        logout_user(&state).await.unwrap();
        assert!(current_user(&state).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_comparison_flow_through_commands() {
        let state = test_state(5);

        add_to_comparison(&state, "species-001".to_string())
            .await
            .unwrap();
        let slots = add_to_comparison(&state, "species-002".to_string())
            .await
            .unwrap();
        assert_eq!(slots.len(), 2);

        let third = add_to_comparison(&state, "species-003".to_string()).await;
        assert!(third.unwrap_err().contains("validation"));

        let slots = remove_from_comparison(&state, 0).await.unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].name, "Species-002");

        let slots = get_comparison(&state).await.unwrap();
        assert_eq!(slots.len(), 1);
    }

    #[tokio::test]
    async fn test_profile_through_commands() {
        let state = test_state(5);

        let profile = get_pokemon_profile(&state, "3".to_string()).await.unwrap();
        assert_eq!(profile.name, "Species-003");
        assert!((profile.height_m - 1.0).abs() < f64::EPSILON);

        let missing = get_pokemon_profile(&state, "999".to_string()).await;
        assert!(missing.unwrap_err().contains("not_found"));
    }
}
