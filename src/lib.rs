//! A URL router that buckets patterns by their static prefix.
//!
//! A pattern such as `/users/:id/posts` is split at its first capture
//! token: `/users` keys the bucket, `:id` and `posts` become segments.
//! A lookup truncates the request path one directory level at a time until
//! it hits a bucket key, then takes the first route of that bucket, in
//! registration order, whose segments fit the rest of the path.
//!
//! ```
//! use prefix_router::RouteTable;
//!
//! let mut table: RouteTable<u32> = RouteTable::new();
//! table.add("/users/:id", 1).add("/users/:id/posts/:post_id", 2);
//!
//! let (data, captures) = table.get("/users/42/posts/7").unwrap();
//! assert_eq!(*data, 2);
//! assert_eq!(captures.get("id"), Some("42"));
//! assert_eq!(captures.get("post_id"), Some("7"));
//!
//! assert!(table.get("/teams/1").is_none());
//! ```
//!
//! Registration takes `&mut self` and lookups take `&self`, so a table is
//! filled before it is shared between request handlers. To change routes
//! while serving, build a new table and swap it in
//! (see `SharedRouterService`).

#![forbid(unsafe_code)]

mod router;

pub use self::router::{clean_tokens, Captures, Route, RouteTable, Segment};

#[cfg(feature = "http-router")]
mod http_router;

#[cfg(feature = "http-router")]
pub use self::http_router::{HttpRouter, Method};

#[cfg(feature = "hyper-service")]
mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{
    BoxError, BoxHandler, Handler, ParamError, Params, RouterService, SharedRouterService,
    NOT_FOUND_BODY,
};
