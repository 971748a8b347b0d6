use super::service::RouterService;
use super::{BoxError, BoxFuture, Request, Response};

use std::sync::Arc;
use std::task::{Context, Poll};

use arc_swap::ArcSwap;
use hyper::service::Service;
use tracing::info;

/// A [`RouterService`] that can be rebuilt while serving.
///
/// Each request resolves against the snapshot loaded when it arrived.
/// [`SharedRouterService::replace`] publishes a new snapshot for the
/// requests that follow. Clones share the snapshot.
#[derive(Clone)]
pub struct SharedRouterService {
    current: Arc<ArcSwap<RouterService>>,
}

impl SharedRouterService {
    pub fn new(service: RouterService) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(service)),
        }
    }

    pub fn load(&self) -> Arc<RouterService> {
        self.current.load_full()
    }

    pub fn replace(&self, service: RouterService) {
        let routes = service.router().len();
        self.current.store(Arc::new(service));
        info!(routes, "router service replaced");
    }
}

impl Service<Request> for SharedRouterService {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.current.load().dispatch(req)
    }
}
