#![deny(missing_docs)]

//! # Bridge Runtime Singleton
//!
//! Holds the lazily constructed original application. Construction runs the
//! registration collaborator exactly once per bridge; concurrent first
//! callers are funneled through a single in-flight initialization, so all
//! of them observe the same fully registered instance.

use crate::bridge::app::{App, Router};
use crate::domain;
use crate::domain::memory::MemStorage;
use crate::domain::storage::Storage;
use futures::future::BoxFuture;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::sync::OnceCell;

/// Asynchronous route-registration collaborator: takes a fresh application,
/// registers the full route table onto it and hands it back. Invoked at
/// most once per bridge.
pub type Registrar = Box<dyn Fn(App) -> BoxFuture<'static, App> + Send + Sync>;

/// The bridge between the generated adapter units and the original
/// application's route table.
pub struct Bridge {
    registrar: Registrar,
    router: OnceCell<Arc<Router>>,
    timeout: Duration,
}

impl Bridge {
    /// Bound on how long a bridged invocation may stay unresolved before it
    /// is answered with a gateway timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a bridge that will construct its application through
    /// `registrar` on first use.
    pub fn new(registrar: Registrar) -> Self {
        Bridge {
            registrar,
            router: OnceCell::new(),
            timeout: Bridge::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the finalized application router, constructing it on first
    /// call. Late concurrent callers await the same in-flight construction
    /// instead of constructing their own instance.
    pub async fn application(&self) -> Arc<Router> {
        self.router
            .get_or_init(|| async {
                let app = (self.registrar)(App::new()).await;
                let router = Arc::new(app.finalize());
                tracing::debug!(routes = router.len(), "original application constructed");
                router
            })
            .await
            .clone()
    }
}

fn domain_registrar(app: App) -> BoxFuture<'static, App> {
    Box::pin(async move {
        static STORAGE: OnceLock<Arc<dyn Storage>> = OnceLock::new();
        let storage: Arc<dyn Storage> =
            Arc::clone(STORAGE.get_or_init(|| Arc::new(MemStorage::default())));
        domain::register_routes(app, storage).await
    })
}

/// Process-wide bridge wired to the domain route registration over the
/// in-memory storage backend. Generated adapter units dispatch through this
/// instance; it lives for the process lifetime.
pub fn shared() -> &'static Bridge {
    static SHARED: OnceLock<Bridge> = OnceLock::new();
    SHARED.get_or_init(|| Bridge::new(Box::new(domain_registrar)))
}
