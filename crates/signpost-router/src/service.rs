//! Async driver: a single always-running consumer of the action stream.
//!
//! Hosts that drive navigation from async tasks send actions through a
//! [`RouterHandle`]; the [`RouterService`] loop feeds them into the store
//! in send order. Synchronous hosts can skip this layer and call
//! [`Router::dispatch`](crate::Router::dispatch) directly - the semantics
//! are identical, because the store queue is what serializes pipelines.

use std::sync::Arc;

use signpost_core::{RouterAction, Url};
use tokio::sync::mpsc;
use tracing::info;

use crate::error::RouterError;
use crate::router::Router;
use crate::store::RouterStore;

/// Clonable sender side of the action stream.
pub struct RouterHandle<D> {
    tx: mpsc::UnboundedSender<RouterAction<D>>,
}

impl<D> RouterHandle<D> {
    /// Send a navigation request to the running service.
    pub fn navigate(&self, url: impl Into<Url>) -> Result<(), RouterError> {
        self.dispatch(RouterAction::Navigate { url: url.into() })
    }

    /// Send any action to the running service.
    pub fn dispatch(&self, action: RouterAction<D>) -> Result<(), RouterError> {
        self.tx.send(action).map_err(|_| RouterError::ServiceStopped)
    }
}

impl<D> Clone for RouterHandle<D> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// The consuming end of the action stream.
pub struct RouterService<D, M> {
    store: Arc<RouterStore<D, M>>,
    rx: mpsc::UnboundedReceiver<RouterAction<D>>,
}

impl<D, M> RouterService<D, M>
where
    D: Clone + Send + Sync + 'static,
    M: Send + Sync + 'static,
{
    /// Pair a service with a handle for an existing router.
    pub fn new(router: &Router<D, M>) -> (Self, RouterHandle<D>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                store: Arc::clone(router.store()),
                rx,
            },
            RouterHandle { tx },
        )
    }

    /// Consume the stream until every handle is dropped. Pipeline faults
    /// are logged by the store's drain; the loop keeps consuming.
    pub async fn run(mut self) {
        info!(router = %self.store.name(), "router service started");
        while let Some(action) = self.rx.recv().await {
            let _ = self.store.dispatch(action);
        }
        info!(router = %self.store.name(), "router service stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouterConfig;
    use signpost_core::{RouteConfig, RouteId};

    #[test]
    fn test_handle_fails_once_service_is_gone() {
        tokio_test::block_on(async {
            let config = RouterConfig::new(vec![RouteConfig::new(RouteId(1), "/a", (), ())]);
            let router = Router::new("svc", config).unwrap();
            let (service, handle) = RouterService::new(&router);
            drop(service);
            assert!(matches!(
                handle.navigate("/a"),
                Err(RouterError::ServiceStopped)
            ));
        });
    }
}
