use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, warn};

use crate::catalog::{Movie, MovieCatalog, MovieFilter};
use crate::config::SearchConfig;
use crate::metrics;

/// Observable state of an incremental search.
///
/// Replaced wholesale on every transition; consumers clone it out of the
/// watch channel and never see partial updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    /// Current query text, updated on every keystroke.
    pub query: String,
    /// Results of the most recent committed lookup.
    pub results: Vec<Movie>,
    /// True from lookup dispatch until it settles.
    pub loading: bool,
}

/// State shared with in-flight lookup tasks.
struct Shared {
    state: watch::Sender<SearchSnapshot>,
    /// Generation of the most recent query update. A task whose
    /// generation is older must not write to the state.
    generation: AtomicU64,
}

impl Shared {
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Debounced incremental search over a movie catalog.
///
/// `set_query` is cheap and synchronous; lookups run on spawned tasks,
/// so the controller must be created and driven inside a Tokio runtime.
/// Multiple UI surfaces observe the same state through [`subscribe`].
///
/// [`subscribe`]: SearchController::subscribe
pub struct SearchController {
    catalog: Arc<dyn MovieCatalog>,
    debounce: Duration,
    min_loading: Duration,
    limit: Option<u32>,
    shared: Arc<Shared>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchController {
    /// Create a controller with the given catalog and timing settings.
    pub fn new(catalog: Arc<dyn MovieCatalog>, config: &SearchConfig) -> Self {
        let (state, _) = watch::channel(SearchSnapshot::default());
        Self {
            catalog,
            debounce: Duration::from_millis(config.debounce_ms),
            min_loading: Duration::from_millis(config.min_loading_ms),
            limit: config.limit,
            shared: Arc::new(Shared {
                state,
                generation: AtomicU64::new(0),
            }),
            pending: Mutex::new(None),
        }
    }

    /// Subscribe to state updates. Each receiver sees every committed
    /// snapshot; all receivers observe the same state.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.shared.state.subscribe()
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.shared.state.borrow().clone()
    }

    /// Current query text.
    pub fn query(&self) -> String {
        self.shared.state.borrow().query.clone()
    }

    /// Results of the most recent committed lookup.
    pub fn results(&self) -> Vec<Movie> {
        self.shared.state.borrow().results.clone()
    }

    /// Whether a lookup is visibly in progress.
    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    /// Update the query, restarting the debounce window.
    ///
    /// A whitespace-only query clears the results synchronously and
    /// dispatches nothing. Otherwise a lookup fires once the query has
    /// been stable for the debounce duration.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();

        // Restart the window: whatever was pending is now obsolete, and
        // any in-flight lookup belongs to an older generation.
        if let Some(task) = self.pending_lock().take() {
            task.abort();
        }
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            self.shared.state.send_replace(SearchSnapshot {
                query,
                results: Vec::new(),
                loading: false,
            });
            return;
        }

        // The previous dispatch (if any) is superseded, so nothing is in
        // flight until the new debounce window elapses.
        self.shared.state.send_modify(|s| {
            s.query = query.clone();
            s.loading = false;
        });

        let mut filter = MovieFilter::by_title(query);
        if let Some(limit) = self.limit {
            filter = filter.with_limit(limit);
        }

        let catalog = Arc::clone(&self.catalog);
        let shared = Arc::clone(&self.shared);
        let debounce = self.debounce;
        let min_loading = self.min_loading;

        let task = tokio::spawn(async move {
            sleep(debounce).await;
            if !shared.is_current(generation) {
                return;
            }

            debug!(
                "Dispatching search lookup: title='{}'",
                filter.title.as_deref().unwrap_or_default()
            );
            shared.state.send_modify(|s| s.loading = true);

            // The floor keeps the loading state visible even when the
            // backend answers immediately.
            let started = Instant::now();
            let (outcome, _) = tokio::join!(catalog.movies(&filter), sleep(min_loading));
            metrics::SEARCH_LOOKUP_DURATION.observe(started.elapsed().as_secs_f64());

            if !shared.is_current(generation) {
                return;
            }

            match outcome {
                Ok(movies) => {
                    metrics::SEARCH_LOOKUPS.with_label_values(&["ok"]).inc();
                    shared.state.send_modify(|s| {
                        s.results = movies;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    metrics::SEARCH_LOOKUPS.with_label_values(&["error"]).inc();
                    warn!(
                        "Search lookup failed for '{}': {}",
                        filter.title.as_deref().unwrap_or_default(),
                        e
                    );
                    shared.state.send_modify(|s| {
                        s.results.clear();
                        s.loading = false;
                    });
                }
            }
        });

        *self.pending_lock() = Some(task);
    }

    /// Tear the controller down: cancel the pending debounce task and
    /// invalidate every in-flight lookup. No state write happens after
    /// this returns.
    pub fn shutdown(&self) {
        if let Some(task) = self.pending_lock().take() {
            task.abort();
        }
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn pending_lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
