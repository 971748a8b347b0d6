use super::captures::Captures;
use super::segment::{Segment, SLASH};
use super::{Route, RouteTable};

use std::collections::HashMap;
use std::slice;

use tracing::debug;

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
        self.buckets.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in registration order.
    pub fn iter(&self) -> slice::Iter<'_, Route<T>> {
        self.routes.iter()
    }

    /// Registers `pattern`. Tokens are separated by `/`, a token starting
    /// with `:` captures a value. Patterns are accepted as written: no
    /// duplicate detection, no trailing slash normalization.
    pub fn add(&mut self, pattern: &str, data: T) -> &mut Self {
        self.insert_route(pattern, data);
        self
    }

    /// Resolves `path` to the data of the first matching route in the
    /// longest registered prefix bucket, together with the captured values.
    ///
    /// Returns `None` when no bucket key is a truncation of `path`, or when
    /// no route of the first such bucket matches.
    pub fn get<'s, 'p, 't>(&'s self, path: &'p str) -> Option<(&'t T, Captures<'p>)>
    where
        's: 'p + 't,
    {
        let mut captures = Captures::new();
        let data = self.resolve(path, &mut captures)?;
        Some((data, captures))
    }

    /// Re-registers every route of `table` under `prefix`, keeping their
    /// order.
    pub fn mount(&mut self, prefix: &str, table: RouteTable<T>) -> &mut Self {
        debug!(prefix, routes = table.len(), "mount route table");
        for route in table.routes {
            let pattern = join_pattern(prefix, &route.pattern());
            self.insert_route(&pattern, route.data);
        }
        self
    }

    pub fn nest(&mut self, prefix: &str, f: impl FnOnce(&mut RouteTable<T>)) -> &mut Self {
        let mut table = Self::new();
        f(&mut table);
        self.mount(prefix, table)
    }

    /// Appends every route of `table` with its pattern unchanged.
    pub fn merge(&mut self, table: RouteTable<T>) -> &mut Self {
        self.mount("", table)
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RouteTable<T> {
    type Item = &'a Route<T>;
    type IntoIter = slice::Iter<'a, Route<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Route<T> {
    /// Tokens before the first capture, joined with `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// A pattern that registers to the same prefix and segments.
    pub fn pattern(&self) -> String {
        let mut buf = String::from(&*self.prefix);
        for segment in self.segments.iter() {
            buf.push(SLASH);
            segment.write_token(&mut buf);
        }
        buf
    }
}

fn join_pattern(prefix: &str, pattern: &str) -> String {
    if prefix.is_empty() {
        return pattern.to_owned();
    }
    if pattern.is_empty() || pattern == "/" {
        return prefix.to_owned();
    }
    format!(
        "{}/{}",
        prefix.trim_end_matches(SLASH),
        pattern.trim_start_matches(SLASH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join() {
        assert_eq!(join_pattern("", "/a/:b"), "/a/:b");
        assert_eq!(join_pattern("/api", "/"), "/api");
        assert_eq!(join_pattern("/api", ""), "/api");
        assert_eq!(join_pattern("/api/", "/users"), "/api/users");
        assert_eq!(join_pattern("/api", "users/:id"), "/api/users/:id");
        assert_eq!(join_pattern("/", "/users"), "/users");
    }

    #[test]
    fn pattern_rebuilds_registration() {
        let mut table: RouteTable<()> = RouteTable::new();
        table
            .add("/a/:b/c", ())
            .add("/static/page", ())
            .add(":id", ())
            .add("/", ());

        let patterns: Vec<String> = table.iter().map(Route::pattern).collect();
        assert_eq!(patterns, ["/a/:b/c", "/static/page", "/:id", "/"]);

        let mut again: RouteTable<()> = RouteTable::new();
        for p in &patterns {
            again.add(p, ());
        }
        for (lhs, rhs) in table.iter().zip(again.iter()) {
            assert_eq!(lhs.prefix(), rhs.prefix());
            assert_eq!(lhs.segments(), rhs.segments());
        }
    }
}
