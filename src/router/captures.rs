use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured while resolving a path.
///
/// Behaves as a map from capture name to the raw path token: recording a
/// name twice keeps the latest value in the position of the first one.
/// Values are never decoded or coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'p> {
    buf: SmallVec<[(&'p str, &'p str); 8]>,
}

impl<'p> Captures<'p> {
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'p str, &'p str)> + '_ {
        self.buf.iter().copied()
    }
}

impl<'p> Deref for Captures<'p> {
    type Target = [(&'p str, &'p str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'p> Captures<'p> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn insert(&mut self, name: &'p str, value: &'p str) {
        match self.buf.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name, value)),
        }
    }

    pub(super) fn clear(&mut self) {
        self.buf.clear();
    }
}
