// src/services/profile_service.rs
//
// Detail page assembly: one full record (sprites, stats, abilities, flavor
// text) fetched through the catalog.

use std::sync::Arc;

use crate::domain::PokemonDetail;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ProfileViewed};
use crate::integrations::PokemonCatalog;

pub struct ProfileService {
    catalog: Arc<dyn PokemonCatalog>,
    event_bus: Arc<EventBus>,
}

impl ProfileService {
    pub fn new(catalog: Arc<dyn PokemonCatalog>, event_bus: Arc<EventBus>) -> Self {
        Self { catalog, event_bus }
    }

    /// Full record by id or name. NotFound propagates; the page renders its
    /// own empty state from it.
    pub async fn profile(&self, identifier: &str) -> AppResult<PokemonDetail> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AppError::Validation(
                "No pokemon selected".to_string(),
            ));
        }

        let detail = self.catalog.fetch_detail(identifier).await?;

        self.event_bus.emit(ProfileViewed::new(
            detail.pokemon.id,
            detail.pokemon.name.clone(),
        ));

        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Pokemon, StatValue};
    use async_trait::async_trait;

    struct StubCatalog;

    #[async_trait]
    impl PokemonCatalog for StubCatalog {
        async fn fetch_pokemon(&self, identifier: &str) -> AppResult<Pokemon> {
            self.fetch_detail(identifier).await.map(|d| d.pokemon)
        }

        async fn fetch_detail(&self, identifier: &str) -> AppResult<PokemonDetail> {
            if identifier != "9" && identifier != "blastoise" {
                return Err(AppError::NotFound);
            }
            Ok(PokemonDetail {
                pokemon: Pokemon {
                    id: 9,
                    name: "blastoise".to_string(),
                    image_url: "https://img/9.gif".to_string(),
                    types: vec!["water".to_string()],
                },
                height_dm: 16,
                weight_hg: 855,
                abilities: vec!["torrent".to_string()],
                stats: vec![StatValue {
                    name: "hp".to_string(),
                    value: 79,
                }],
                flavor_text: Some("Crushes foes under its heavy body.".to_string()),
            })
        }

        async fn total_count(&self) -> u32 {
            898
        }
    }

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(StubCatalog), Arc::new(EventBus::new()))
    }

    #[tokio::test]
    async fn test_profile_by_id_or_name() {
        let svc = service();
        assert_eq!(svc.profile("9").await.unwrap().pokemon.name, "blastoise");
        assert_eq!(svc.profile("blastoise").await.unwrap().pokemon.id, 9);
    }

    #[tokio::test]
    async fn test_profile_unknown_identifier_is_not_found() {
        let svc = service();
        assert!(matches!(svc.profile("0").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_profile_blank_identifier_is_rejected() {
        let svc = service();
        assert!(matches!(
            svc.profile("  ").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_profile_emits_event() {
        let bus = Arc::new(EventBus::new());
        let svc = ProfileService::new(Arc::new(StubCatalog), Arc::clone(&bus));

        svc.profile("blastoise").await.unwrap();

        let log = bus.event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "ProfileViewed");
    }
}
