mod handler;
mod params;
mod service;
mod service_macro;
mod shared;

pub use self::handler::{BoxHandler, Handler};
pub use self::params::{ParamError, Params};
pub use self::service::{RouterService, NOT_FOUND_BODY};
pub use self::shared::SharedRouterService;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;
