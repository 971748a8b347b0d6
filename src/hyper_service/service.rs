use super::handler::{BoxHandler, Handler};
use super::params::Params;
use super::shared::SharedRouterService;
use super::{BoxError, BoxFuture, Request, Response};
use crate::http_router::{HttpRouter, Method};

use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, StatusCode};
use tracing::debug;

/// Body of the `404` response sent when no route matches and no
/// not-found handler is configured.
pub const NOT_FOUND_BODY: &str = "No matching route found";

pub struct RouterService {
    router: HttpRouter<BoxHandler>,
    not_found: Option<BoxHandler>,
}

impl RouterService {
    pub fn new() -> Self {
        Self::from_router(HttpRouter::new())
    }

    pub fn from_router(router: HttpRouter<BoxHandler>) -> Self {
        Self {
            router,
            not_found: None,
        }
    }

    pub fn router(&self) -> &HttpRouter<BoxHandler> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut HttpRouter<BoxHandler> {
        &mut self.router
    }

    pub fn not_found(&mut self, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.not_found = Some(Box::new(h));
        self
    }

    pub fn into_shared(self) -> SharedRouterService {
        SharedRouterService::new(self)
    }

    /// Runs the handler registered for the request, the not-found handler,
    /// or answers `404` with [`NOT_FOUND_BODY`].
    pub fn dispatch(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let matched = self
            .router
            .find(req.method(), req.uri().path())
            .map(|(h, caps)| (h, Params::from(&caps)));

        if let Some((handler, params)) = matched {
            return handler.call(req, params);
        }

        debug!(method = %req.method(), path = req.uri().path(), "no matching route");

        match self.not_found {
            Some(ref h) => h.call(req, Params::default()),
            None => Box::pin(async { Ok(default_not_found()) }),
        }
    }
}

impl Default for RouterService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.dispatch(req)
    }
}

fn default_not_found() -> Response {
    let mut res = Response::new(Body::from(NOT_FOUND_BODY));
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

impl HttpRouter<BoxHandler> {
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert(method, pattern, Box::new(h))
    }

    pub fn with_not_found(self, h: impl Handler + Send + Sync + 'static) -> RouterService {
        let mut service = RouterService::from_router(self);
        service.not_found(h);
        service
    }

    pub fn into_service(self) -> RouterService {
        RouterService::from_router(self)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
            self.route(Method::$method, pattern, h)
        }
    };
}

impl HttpRouter<BoxHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
