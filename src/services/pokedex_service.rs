// src/services/pokedex_service.rs
//
// The incremental catalog loader: bounded-concurrency retrieval of a growing
// id range, plus the sort/filter projection the grid renders from.
//
// State is owned by the service and mutated only through it. Loading methods
// take &mut self, so a second load cannot start while one is in flight; the
// application layer shares the service behind an async mutex.

use futures::future::join_all;
use std::sync::Arc;

use crate::domain::Pokemon;
use crate::error::{AppError, AppResult};
use crate::events::{BatchLoaded, CatalogExhausted, CollectionReplaced, EventBus};
use crate::integrations::PokemonCatalog;

/// Maximum number of concurrent in-flight fetches per scheduling step
pub const BATCH_WINDOW: usize = 8;

/// Records consumed per load call unless the caller asks otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Comparator applied by the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    NameAscending,
    NameDescending,
    IdAscending,
    IdDescending,
}

impl SortMode {
    /// Wire labels as the UI sends them
    pub fn parse(label: &str) -> Option<SortMode> {
        match label {
            "az" => Some(SortMode::NameAscending),
            "za" => Some(SortMode::NameDescending),
            "id-asc" => Some(SortMode::IdAscending),
            "id-desc" => Some(SortMode::IdDescending),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::NameAscending => write!(f, "az"),
            SortMode::NameDescending => write!(f, "za"),
            SortMode::IdAscending => write!(f, "id-asc"),
            SortMode::IdDescending => write!(f, "id-desc"),
        }
    }
}

/// Where a load session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    FetchingCount,
    Streaming,
    Exhausted,
}

/// Session-scoped progress marker over the identifier space.
/// `next_id` only ever moves forward; `total_count` is resolved once per
/// session and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub next_id: u32,
    pub total_count: Option<u32>,
}

/// Everything the loader owns: the accumulated collection, the cursor, the
/// projection inputs and the skip diagnostics trail.
#[derive(Debug)]
struct PokedexState {
    pokemons: Vec<Pokemon>,
    cursor: PaginationCursor,
    phase: LoadPhase,
    sort_mode: SortMode,
    type_filter: Option<String>,
    skipped_ids: Vec<u32>,
}

impl PokedexState {
    fn new() -> Self {
        Self {
            pokemons: Vec::new(),
            cursor: PaginationCursor {
                next_id: 1,
                total_count: None,
            },
            phase: LoadPhase::Idle,
            sort_mode: SortMode::default(),
            type_filter: None,
            skipped_ids: Vec::new(),
        }
    }
}

pub struct PokedexService {
    catalog: Arc<dyn PokemonCatalog>,
    event_bus: Arc<EventBus>,
    state: PokedexState,
}

impl PokedexService {
    pub fn new(catalog: Arc<dyn PokemonCatalog>, event_bus: Arc<EventBus>) -> Self {
        Self {
            catalog,
            event_bus,
            state: PokedexState::new(),
        }
    }

    /// Start a fresh load session: prior collection, cursor and skip trail
    /// are discarded, the total count is re-resolved, and the first page is
    /// streamed in. Sort mode and type filter survive the reset.
    pub async fn load_initial(&mut self, page_size: u32) -> AppResult<()> {
        let sort_mode = self.state.sort_mode;
        let type_filter = self.state.type_filter.take();

        self.state = PokedexState::new();
        self.state.sort_mode = sort_mode;
        self.state.type_filter = type_filter;

        self.event_bus.emit(CollectionReplaced::new(0));

        self.load_next(page_size).await
    }

    /// Consume the next id range. No-op once the cursor has moved past the
    /// last catalog id.
    ///
    /// The range is split into consecutive sub-batches of at most
    /// BATCH_WINDOW fetches; every fetch in a sub-batch settles before the
    /// next sub-batch is issued, which bounds peak outstanding requests.
    /// Records append in identifier order no matter which fetch finished
    /// first. A failed fetch is skipped and logged; the cursor advances over
    /// it regardless, so the id is not retried this session.
    pub async fn load_next(&mut self, page_size: u32) -> AppResult<()> {
        if page_size == 0 {
            return Ok(());
        }

        let total = match self.state.cursor.total_count {
            Some(total) => total,
            None => {
                self.state.phase = LoadPhase::FetchingCount;
                let total = self.catalog.total_count().await;
                self.state.cursor.total_count = Some(total);
                total
            }
        };

        if self.state.cursor.next_id > total {
            self.state.phase = LoadPhase::Exhausted;
            return Ok(());
        }
        self.state.phase = LoadPhase::Streaming;

        let start_id = self.state.cursor.next_id;
        let end_id = total.min(start_id.saturating_add(page_size - 1));
        let ids: Vec<u32> = (start_id..=end_id).collect();

        let mut loaded = 0usize;
        let mut skipped: Vec<u32> = Vec::new();

        for window in ids.chunks(BATCH_WINDOW) {
            let fetches: Vec<_> = window
                .iter()
                .map(|id| {
                    let catalog = Arc::clone(&self.catalog);
                    let identifier = id.to_string();
                    async move { catalog.fetch_pokemon(&identifier).await }
                })
                .collect();

            let results = join_all(fetches).await;

            // Buffer-and-reorder: insertion follows the original identifier
            // order, never completion order.
            for (id, result) in window.iter().zip(results) {
                match result {
                    Ok(pokemon) => {
                        self.state.pokemons.push(pokemon);
                        loaded += 1;
                    }
                    Err(e) => {
                        log::warn!("fetch for id {} failed, skipping: {}", id, e);
                        skipped.push(*id);
                    }
                }
            }
        }

        self.state.cursor.next_id = end_id + 1;
        self.state.skipped_ids.extend_from_slice(&skipped);

        self.event_bus
            .emit(BatchLoaded::new(start_id, end_id, loaded, skipped));

        if self.state.cursor.next_id > total {
            self.state.phase = LoadPhase::Exhausted;
            self.event_bus.emit(CatalogExhausted::new(total));
        }

        Ok(())
    }

    /// Single-record mode: the collection is replaced wholly with the match,
    /// or emptied when there is none. The pagination cursor is neither read
    /// nor advanced, so an interleaved `load_next` resumes where it left off.
    pub async fn search(&mut self, term: &str) -> AppResult<()> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::Validation(
                "Search term cannot be empty".to_string(),
            ));
        }

        match self.catalog.fetch_pokemon(term).await {
            Ok(pokemon) => {
                self.state.pokemons = vec![pokemon];
            }
            Err(e) => {
                log::warn!("search for {:?} found nothing: {}", term, e);
                self.state.pokemons.clear();
            }
        }

        self.event_bus
            .emit(CollectionReplaced::new(self.state.pokemons.len()));

        Ok(())
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.state.sort_mode = mode;
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode
    }

    pub fn set_type_filter(&mut self, filter: Option<String>) {
        self.state.type_filter = filter.map(|tag| tag.trim().to_lowercase());
    }

    /// Selecting the active tag again clears the filter
    pub fn toggle_type_filter(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if self.state.type_filter.as_deref() == Some(tag.as_str()) {
            self.state.type_filter = None;
        } else {
            self.state.type_filter = Some(tag);
        }
    }

    pub fn type_filter(&self) -> Option<&str> {
        self.state.type_filter.as_deref()
    }

    /// The filtered + sorted list the grid should render right now
    pub fn view(&self) -> Vec<Pokemon> {
        project(
            &self.state.pokemons,
            self.state.sort_mode,
            self.state.type_filter.as_deref(),
        )
    }

    /// The raw collection in insertion (identifier) order
    pub fn collection(&self) -> &[Pokemon] {
        &self.state.pokemons
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.state.cursor
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.phase
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.phase == LoadPhase::Exhausted
    }

    /// Ids dropped by skip-and-advance this session
    pub fn skipped_ids(&self) -> &[u32] {
        &self.state.skipped_ids
    }
}

/// Derive the display list from the collection: filter by type membership,
/// then sort. Pure and idempotent; the underlying sort is stable, so equal
/// keys keep their insertion order.
pub fn project(records: &[Pokemon], sort_mode: SortMode, type_filter: Option<&str>) -> Vec<Pokemon> {
    let mut list: Vec<Pokemon> = records
        .iter()
        .filter(|p| type_filter.map_or(true, |tag| p.has_type(tag)))
        .cloned()
        .collect();

    match sort_mode {
        SortMode::NameAscending => list.sort_by(|a, b| name_key(&a.name).cmp(&name_key(&b.name))),
        SortMode::NameDescending => list.sort_by(|a, b| name_key(&b.name).cmp(&name_key(&a.name))),
        SortMode::IdAscending => list.sort_by(|a, b| a.id.cmp(&b.id)),
        SortMode::IdDescending => list.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    list
}

/// Case-insensitive collation key for name ordering
fn name_key(name: &str) -> String {
    name.to_lowercase()
}
