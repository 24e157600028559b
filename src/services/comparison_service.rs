// src/services/comparison_service.rs
//
// Two-slot comparator. The current selection is persisted under one key in
// the local store as a JSON array of detail records, so it survives across
// sessions the way the original browser storage did.

use std::sync::Arc;

use crate::domain::PokemonDetail;
use crate::error::{AppError, AppResult};
use crate::events::{ComparisonChanged, EventBus};
use crate::integrations::PokemonCatalog;
use crate::repositories::LocalStore;

/// Key holding the persisted selection
pub const COMPARED_POKEMONS_KEY: &str = "comparedPokemons";

/// The comparator renders exactly two cards
pub const MAX_COMPARISON_SLOTS: usize = 2;

pub struct ComparisonService {
    store: Arc<dyn LocalStore>,
    catalog: Arc<dyn PokemonCatalog>,
    event_bus: Arc<EventBus>,
}

impl ComparisonService {
    pub fn new(
        store: Arc<dyn LocalStore>,
        catalog: Arc<dyn PokemonCatalog>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            store,
            catalog,
            event_bus,
        }
    }

    /// The persisted selection. A missing or unreadable value degrades to an
    /// empty selection rather than an error.
    pub fn selection(&self) -> AppResult<Vec<PokemonDetail>> {
        let raw = match self.store.get(COMPARED_POKEMONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(slots) => Ok(slots),
            Err(e) => {
                log::warn!("stored comparison selection did not parse, ignoring: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Fetch a record by name and put it in the first free slot
    pub async fn add(&self, name: &str) -> AppResult<Vec<PokemonDetail>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Type a pokemon name first".to_string(),
            ));
        }

        let mut slots = self.selection()?;
        if slots.len() >= MAX_COMPARISON_SLOTS {
            return Err(AppError::Validation(
                "Both comparison slots are taken; remove one first".to_string(),
            ));
        }

        let detail = self.catalog.fetch_detail(name).await?;
        slots.push(detail);
        self.persist(&slots)?;

        self.event_bus.emit(ComparisonChanged::new(slots.len()));

        Ok(slots)
    }

    /// Free a slot by position. Out-of-range indexes are a no-op.
    pub fn remove(&self, index: usize) -> AppResult<Vec<PokemonDetail>> {
        let mut slots = self.selection()?;

        if index < slots.len() {
            slots.remove(index);
            self.persist(&slots)?;
            self.event_bus.emit(ComparisonChanged::new(slots.len()));
        }

        Ok(slots)
    }

    fn persist(&self, slots: &[PokemonDetail]) -> AppResult<()> {
        let encoded = serde_json::to_string(slots)?;
        self.store.set(COMPARED_POKEMONS_KEY, &encoded)
    }
}
