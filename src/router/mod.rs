mod captures;
mod core;
mod imp;
mod segment;

pub use self::captures::Captures;
pub use self::core::clean_tokens;
pub use self::segment::Segment;

use std::collections::HashMap;

use smallvec::SmallVec;

/// Registered routes, bucketed by static prefix.
#[derive(Debug)]
pub struct RouteTable<T> {
    routes: Vec<Route<T>>,
    buckets: HashMap<Box<str>, SmallVec<[usize; 4]>>,
}

/// A registered pattern: its static prefix, the segments after it and the
/// data handed back on a match.
#[derive(Debug)]
pub struct Route<T> {
    prefix: Box<str>,
    segments: Box<[Segment]>,
    data: T,
}
