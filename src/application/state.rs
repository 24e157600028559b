// src/application/state.rs

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::db::{create_connection_pool, get_connection, initialize_database};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{PokeApiClient, PokemonCatalog};
use crate::repositories::{LocalStore, SqliteLocalStore};
use crate::services::{AuthService, ComparisonService, PokedexService, ProfileService};

/// Application state shared with the UI boundary.
///
/// The pokedex loader sits behind an async mutex: loading mutates its state
/// through `&mut self`, and the mutex is what serializes overlapping
/// load-more clicks into one in-flight load at a time.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub pokedex: Mutex<PokedexService>,
    pub profile_service: Arc<ProfileService>,
    pub comparison_service: Arc<ComparisonService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Composition root: wire the database, the PokeAPI client and every
    /// service against the shared event bus.
    pub fn initialize() -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());

        let pool = Arc::new(create_connection_pool()?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        let store: Arc<dyn LocalStore> = Arc::new(SqliteLocalStore::new(pool));
        let catalog: Arc<dyn PokemonCatalog> = Arc::new(PokeApiClient::new());

        Ok(Self::with_components(store, catalog, event_bus))
    }

    /// Wire explicit components. Tests pass an in-memory store and a stub
    /// catalog here.
    pub fn with_components(
        store: Arc<dyn LocalStore>,
        catalog: Arc<dyn PokemonCatalog>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let pokedex = Mutex::new(PokedexService::new(
            Arc::clone(&catalog),
            Arc::clone(&event_bus),
        ));
        let profile_service = Arc::new(ProfileService::new(
            Arc::clone(&catalog),
            Arc::clone(&event_bus),
        ));
        let comparison_service = Arc::new(ComparisonService::new(
            Arc::clone(&store),
            Arc::clone(&catalog),
            Arc::clone(&event_bus),
        ));
        let auth_service = Arc::new(AuthService::new(store, Arc::clone(&event_bus)));

        Self {
            event_bus,
            pokedex,
            profile_service,
            comparison_service,
            auth_service,
        }
    }
}
