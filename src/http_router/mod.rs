mod router_macro;

use crate::router::{Captures, Route, RouteTable};

use std::collections::HashMap;

pub use http::Method;

/// One [`RouteTable`] per request method.
#[derive(Debug)]
pub struct HttpRouter<T> {
    method_map: HashMap<Method, RouteTable<T>>,
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
        }
    }

    pub fn find<'s, 'p, 't>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Option<(&'t T, Captures<'p>)>
    where
        's: 'p + 't,
    {
        self.method_map.get(method)?.get(path)
    }

    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        self.access_table(method).add(pattern, data);
        self
    }

    pub fn table(&self, method: &Method) -> Option<&RouteTable<T>> {
        self.method_map.get(method)
    }

    /// Every route with its method. Methods come in no particular order,
    /// routes of one method in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&Method, &Route<T>)> + '_ {
        self.method_map
            .iter()
            .flat_map(|(method, table)| table.iter().map(move |route| (method, route)))
    }

    pub fn len(&self) -> usize {
        self.method_map.values().map(RouteTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nest(&mut self, prefix: &str, f: impl FnOnce(&mut HttpRouter<T>)) -> &mut Self {
        let mut sub_router = Self::new();
        f(&mut sub_router);
        self.mount(prefix, sub_router)
    }

    pub fn mount(&mut self, prefix: &str, router: HttpRouter<T>) -> &mut Self {
        for (method, table) in router.method_map {
            self.access_table(method).mount(prefix, table);
        }
        self
    }

    pub fn merge(&mut self, router: HttpRouter<T>) -> &mut Self {
        self.mount("", router)
    }
}

impl<T> Default for HttpRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HttpRouter<T> {
    fn access_table(&mut self, method: Method) -> &mut RouteTable<T> {
        self.method_map.entry(method).or_insert_with(RouteTable::new)
    }
}
