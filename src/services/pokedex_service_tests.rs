// src/services/pokedex_service_tests.rs
//
// Loader tests: insertion order under scrambled completion order, bounded
// concurrency, skip-and-advance, and the single-record search path. The
// catalog is an in-memory fake with deterministic failures and per-id
// delays.

#[cfg(test)]
mod loader_tests {
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::domain::{Pokemon, PokemonDetail};
    use crate::error::{AppError, AppResult};
    use crate::events::{BatchLoaded, EventBus};
    use crate::integrations::PokemonCatalog;
    use crate::services::pokedex_service::{LoadPhase, PokedexService, BATCH_WINDOW};

    fn record(id: u32, name: &str, types: &[&str]) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            image_url: format!("https://img/{}.png", id),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    struct FakeCatalog {
        total: u32,
        records: Vec<Pokemon>,
        failing: HashSet<u32>,
        delays: HashMap<u32, u64>,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
    }

    impl FakeCatalog {
        /// A catalog holding one generated record per id in [1, total]
        fn with_range(total: u32) -> Self {
            let records = (1..=total)
                .map(|id| record(id, &format!("species-{:03}", id), &["normal"]))
                .collect();
            Self {
                total,
                records,
                failing: HashSet::new(),
                delays: HashMap::new(),
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
            }
        }

        /// Fetches for these ids fail with a transport error
        fn failing(mut self, ids: &[u32]) -> Self {
            self.failing.extend(ids.iter().copied());
            self
        }

        /// Per-id artificial latency, for scrambling completion order
        fn delayed(mut self, id: u32, millis: u64) -> Self {
            self.delays.insert(id, millis);
            self
        }

        /// An extra record reachable by name, outside the generated range
        fn with_record(mut self, pokemon: Pokemon) -> Self {
            self.records.push(pokemon);
            self
        }

        fn peak_in_flight(&self) -> usize {
            self.peak_in_flight.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PokemonCatalog for FakeCatalog {
        async fn fetch_pokemon(&self, identifier: &str) -> AppResult<Pokemon> {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

            let found = self
                .records
                .iter()
                .find(|p| p.id.to_string() == identifier || p.name == identifier)
                .cloned();

            let delay = found
                .as_ref()
                .and_then(|p| self.delays.get(&p.id))
                .copied()
                .unwrap_or(1);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            let pokemon = found.ok_or(AppError::NotFound)?;
            if self.failing.contains(&pokemon.id) {
                return Err(AppError::Transport(format!(
                    "simulated outage for id {}",
                    pokemon.id
                )));
            }
            Ok(pokemon)
        }

        async fn fetch_detail(&self, identifier: &str) -> AppResult<PokemonDetail> {
            let pokemon = self.fetch_pokemon(identifier).await?;
            Ok(PokemonDetail {
                pokemon,
                height_dm: 7,
                weight_hg: 69,
                abilities: Vec::new(),
                stats: Vec::new(),
                flavor_text: None,
            })
        }

        async fn total_count(&self) -> u32 {
            self.total
        }
    }

    fn service(catalog: Arc<FakeCatalog>) -> PokedexService {
        PokedexService::new(catalog, Arc::new(EventBus::new()))
    }

    #[tokio::test]
    async fn test_load_initial_streams_range_in_identifier_order() {
        let mut svc = service(Arc::new(FakeCatalog::with_range(3)));

        svc.load_initial(20).await.unwrap();

        let ids: Vec<u32> = svc.collection().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(svc.cursor().next_id, 4);
        assert_eq!(svc.cursor().total_count, Some(3));
        assert_eq!(svc.phase(), LoadPhase::Exhausted);
    }

    #[tokio::test]
    async fn test_completion_order_does_not_affect_insertion_order() {
        // Later ids finish first; insertion order must still be ascending
        let mut catalog = FakeCatalog::with_range(8);
        for id in 1..=8 {
            catalog = catalog.delayed(id, (8 - id as u64) * 10);
        }
        let mut svc = service(Arc::new(catalog));

        svc.load_initial(8).await.unwrap();

        let ids: Vec<u32> = svc.collection().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[tokio::test]
    async fn test_peak_in_flight_never_exceeds_batch_window() {
        let catalog = Arc::new(FakeCatalog::with_range(20));
        let mut svc = service(Arc::clone(&catalog));

        svc.load_initial(20).await.unwrap();

        assert_eq!(svc.collection().len(), 20);
        assert_eq!(catalog.peak_in_flight(), BATCH_WINDOW);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_skipped_and_cursor_still_advances() {
        let bus = Arc::new(EventBus::new());
        let skipped_seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&skipped_seen);
        bus.subscribe::<BatchLoaded, _>(move |event| {
            sink.lock().unwrap().extend_from_slice(&event.skipped_ids);
        });

        let catalog = Arc::new(FakeCatalog::with_range(3).failing(&[2]));
        let mut svc = PokedexService::new(catalog, bus);

        svc.load_initial(20).await.unwrap();

        let ids: Vec<u32> = svc.collection().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        // Skip-and-advance: the bad id is consumed, not retried
        assert_eq!(svc.cursor().next_id, 4);
        assert_eq!(svc.skipped_ids(), &[2]);
        assert_eq!(*skipped_seen.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_incremental_pagination_until_exhausted() {
        let mut svc = service(Arc::new(FakeCatalog::with_range(45)));

        svc.load_initial(20).await.unwrap();
        assert_eq!(svc.collection().len(), 20);
        assert!(!svc.is_exhausted());

        svc.load_next(20).await.unwrap();
        assert_eq!(svc.collection().len(), 40);
        assert_eq!(svc.cursor().next_id, 41);

        svc.load_next(20).await.unwrap();
        assert_eq!(svc.collection().len(), 45);
        assert!(svc.is_exhausted());
    }

    #[tokio::test]
    async fn test_load_next_is_noop_when_exhausted() {
        let mut svc = service(Arc::new(FakeCatalog::with_range(3)));

        svc.load_initial(20).await.unwrap();
        assert!(svc.is_exhausted());

        svc.load_next(20).await.unwrap();

        assert_eq!(svc.collection().len(), 3);
        assert_eq!(svc.cursor().next_id, 4);
    }

    #[tokio::test]
    async fn test_load_initial_discards_previous_session() {
        let catalog = Arc::new(FakeCatalog::with_range(3).failing(&[2]));
        let mut svc = service(catalog);

        svc.load_initial(20).await.unwrap();
        svc.load_initial(20).await.unwrap();

        // The skip trail belongs to one session; it does not accumulate
        assert_eq!(svc.collection().len(), 2);
        assert_eq!(svc.skipped_ids(), &[2]);
    }

    #[tokio::test]
    async fn test_search_replaces_collection_and_leaves_cursor_alone() {
        let catalog = FakeCatalog::with_range(20)
            .with_record(record(25, "pikachu", &["electric"]));
        let mut svc = service(Arc::new(catalog));

        svc.load_initial(20).await.unwrap();
        assert_eq!(svc.collection().len(), 20);
        let cursor_before = svc.cursor();

        svc.search("pikachu").await.unwrap();

        let ids: Vec<u32> = svc.collection().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![25]);
        assert_eq!(svc.cursor(), cursor_before);
    }

    #[tokio::test]
    async fn test_search_miss_degrades_to_empty_collection() {
        let mut svc = service(Arc::new(FakeCatalog::with_range(5)));

        svc.load_initial(5).await.unwrap();
        svc.search("missingno").await.unwrap();

        assert!(svc.collection().is_empty());
    }

    #[tokio::test]
    async fn test_blank_search_term_is_rejected() {
        let mut svc = service(Arc::new(FakeCatalog::with_range(5)));

        let result = svc.search("   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_view_applies_filter_and_sort_to_loaded_collection() {
        let catalog = FakeCatalog::with_range(0)
            .with_record(record(4, "charmander", &["fire"]))
            .with_record(record(1, "bulbasaur", &["grass", "poison"]))
            .with_record(record(7, "squirtle", &["water"]));
        let mut svc = service(Arc::new(catalog));

        svc.search("bulbasaur").await.unwrap();
        assert_eq!(svc.view().len(), 1);

        svc.set_type_filter(Some("Fire".to_string()));
        assert!(svc.view().is_empty());

        svc.toggle_type_filter("fire");
        assert_eq!(svc.type_filter(), None);
    }
}
