// src/lib.rs
// PokeHub - Pokedex browser, comparator and toy account cache over PokeAPI
//
// Architecture:
// - Domain-centric: invariants live with the entities
// - Event-driven: services publish facts, the renderer subscribes
// - Explicit: no implicit behavior, no ambient globals
// - Thin over the wire: the remote JSON shape is consumed as-is and
//   normalized at the integration boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_pokemon,
    validate_user_account,
    // Pokemon
    Pokemon,
    PokemonDetail,
    StatValue,
    // User (toy credential cache)
    UserAccount,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    // Catalog loading
    BatchLoaded,
    CatalogExhausted,
    CollectionReplaced,
    // Comparison
    ComparisonChanged,
    DomainEvent,
    EventBus,
    EventLogEntry,
    // Profile
    ProfileViewed,
    // Account
    UserLoggedIn,
    UserLoggedOut,
    UserRegistered,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{LocalStore, SqliteLocalStore};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{PokeApiClient, PokemonCatalog, DEFAULT_TOTAL_COUNT, FALLBACK_IMAGE_URL};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    project,
    // Auth Service
    AuthService,
    // Comparison Service
    ComparisonService,
    LoadPhase,
    LoginRequest,
    PaginationCursor,
    // Pokedex Service
    PokedexService,
    // Profile Service
    ProfileService,
    RegisterRequest,
    SortMode,
    BATCH_WINDOW,
    COMPARED_POKEMONS_KEY,
    DEFAULT_PAGE_SIZE,
    LOGGED_USER_KEY,
    MAX_COMPARISON_SLOTS,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
