//! Shared application state.
//!
//! Everything the handlers need is compiled here once at startup: the ticket
//! table, the store, the cats dispatcher with its throttle chain, and the
//! metrics registry. Startup errors are explicit (Result instead of panic).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use catwalk_core::error::{CatwalkError, Result};

use crate::config::ApiConfig;
use crate::dispatch::Dispatcher;
use crate::obs::ApiMetrics;
use crate::store::{MemoryStore, Store};
use crate::throttle::{
    AdmissionCheck, RateScope, ScopedRateCounter, ThrottleChain, WorkingHoursGate,
};

/// The rate-limit scope the cats resource runs under.
pub const CATS_THROTTLE_SCOPE: &str = "low_request";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ApiConfig,
    tickets: HashMap<String, String>,
    store: Arc<MemoryStore>,
    cats: Dispatcher,
    metrics: Arc<ApiMetrics>,
}

impl AppState {
    /// Build application state.
    pub async fn new(cfg: ApiConfig) -> Result<Self> {
        let metrics = Arc::new(ApiMetrics::default());
        let store = Arc::new(MemoryStore::new());

        // Ticket table + known accounts from config.
        let mut tickets = HashMap::new();
        for t in &cfg.auth.tickets {
            tickets.insert(t.ticket.clone(), t.username.clone());
            store.ensure_account(&t.username).await;
        }

        // Sanity check: the scope the cats resource runs under must actually
        // be configured, or every request would be unthrottleable.
        let scope = cfg
            .throttle
            .scopes
            .iter()
            .find(|s| s.name == CATS_THROTTLE_SCOPE)
            .ok_or_else(|| {
                CatwalkError::BadRequest(format!(
                    "throttle scope {CATS_THROTTLE_SCOPE} is not configured"
                ))
            })?;

        let checks: Vec<Arc<dyn AdmissionCheck>> = vec![
            Arc::new(WorkingHoursGate::new(
                cfg.throttle.working_hours.open_hour,
                cfg.throttle.working_hours.close_hour,
            )),
            Arc::new(ScopedRateCounter::new(RateScope {
                name: scope.name.clone(),
                budget: scope.budget,
                window: Duration::from_secs(scope.window_secs),
            })),
        ];
        let chain = ThrottleChain::new(checks);

        let cats = Dispatcher::new(
            chain,
            Arc::clone(&store) as Arc<dyn Store>,
            Arc::clone(&metrics),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                tickets,
                store,
                cats,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn cats(&self) -> &Dispatcher {
        &self.inner.cats
    }

    pub fn store(&self) -> &dyn Store {
        self.inner.store.as_ref()
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }

    /// Resolve a bearer ticket to a username, if the ticket is known.
    pub fn resolve_ticket(&self, ticket: &str) -> Option<String> {
        self.inner.tickets.get(ticket).cloned()
    }
}
