use super::captures::Captures;
use super::segment::{split_pattern, SLASH};
use super::{Route, RouteTable};

use smallvec::SmallVec;
use tracing::{debug, trace};

type Tokens<'a> = SmallVec<[&'a str; 8]>;

impl<T> RouteTable<T> {
    pub(super) fn insert_route(&mut self, pattern: &str, data: T) {
        let (prefix, segments) = split_pattern(pattern);

        debug!(
            pattern,
            prefix = %prefix,
            segments = segments.len(),
            "register route"
        );

        let id = self.routes.len();
        let prefix: Box<str> = prefix.into();

        self.buckets
            .entry(prefix.clone())
            .or_insert_with(SmallVec::new)
            .push(id);

        self.routes.push(Route {
            prefix,
            segments: segments.into(),
            data,
        });
    }

    /// Probes bucket keys from the whole path down to `/`, one directory
    /// level at a time. Only the first existing bucket is matched against.
    pub(super) fn resolve<'s, 'p>(
        &'s self,
        path: &'p str,
        captures: &mut Captures<'p>,
    ) -> Option<&'s T>
    where
        's: 'p,
    {
        let mut remaining = path;
        loop {
            if let Some(ids) = self.buckets.get(remaining) {
                trace!(path, bucket = remaining, "probe hit");
                let found = self.match_bucket(path, ids, captures);
                if found.is_none() {
                    trace!(path, bucket = remaining, "no route in bucket");
                }
                return found;
            }

            if remaining.len() < 2 {
                return None;
            }

            remaining = match remaining.rfind(SLASH) {
                None => return None,
                Some(0) => "/",
                Some(i) => &remaining[..i],
            };
        }
    }

    /// First route of the bucket, in registration order, whose segment count
    /// equals the number of non-empty tokens after its prefix and whose fixed
    /// segments equal the tokens at their positions.
    fn match_bucket<'s, 'p>(
        &'s self,
        path: &'p str,
        ids: &[usize],
        captures: &mut Captures<'p>,
    ) -> Option<&'s T>
    where
        's: 'p,
    {
        'routes: for &id in ids {
            let route = &self.routes[id];

            let rest = path.strip_prefix(&*route.prefix).unwrap_or(path);
            let rest = rest.strip_prefix(SLASH).unwrap_or(rest);
            let params: Tokens<'p> = rest.split(SLASH).collect();

            if clean_tokens(&params).len() != route.segments.len() {
                continue;
            }

            captures.clear();
            // Positions index the raw tokens, empty ones included. Raw tokens
            // are never fewer than non-empty ones, so every index is in range.
            for (segment, &token) in route.segments.iter().zip(params.iter()) {
                if segment.is_fixed() {
                    if token != segment.name() {
                        continue 'routes;
                    }
                } else {
                    captures.insert(segment.name(), token);
                }
            }

            return Some(&route.data);
        }

        captures.clear();
        None
    }
}

/// Keeps the non-empty tokens, in order.
pub fn clean_tokens<'a>(tokens: &[&'a str]) -> SmallVec<[&'a str; 8]> {
    tokens.iter().copied().filter(|t| !t.is_empty()).collect()
}
