use super::BoxError;
use crate::router::Captures;

use std::error::Error as StdError;
use std::str::FromStr;

/// Owned copy of the values captured for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("missing path parameter {name:?}")]
    Missing { name: String },

    #[error("invalid path parameter {name:?} = {value:?}: {source}")]
    Invalid {
        name: String,
        value: String,
        #[source]
        source: BoxError,
    },
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find_map(|(k, v)| if k == name { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Like [`Params::parse`], with absence and parse failure folded into
    /// one error.
    pub fn require<T>(&self, name: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: StdError + Send + Sync + 'static,
    {
        let value = self.get(name).ok_or_else(|| ParamError::Missing {
            name: name.to_owned(),
        })?;
        value.parse().map_err(|e: T::Err| ParamError::Invalid {
            name: name.to_owned(),
            value: value.to_owned(),
            source: Box::new(e),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<&Captures<'_>> for Params {
    fn from(caps: &Captures<'_>) -> Self {
        let entries = caps
            .iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();
        Self { entries }
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteTable;

    fn params_for(pattern: &str, path: &str) -> Params {
        let mut table: RouteTable<()> = RouteTable::new();
        table.add(pattern, ());
        let (_, caps) = table.get(path).unwrap();
        Params::from(&caps)
    }

    #[test]
    fn require_parses() {
        let params = params_for("/users/:id", "/users/42");
        assert_eq!(params.require::<u32>("id").unwrap(), 42);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn require_reports_missing_and_invalid() {
        let params = params_for("/users/:id", "/users/abc");

        match params.require::<u32>("name") {
            Err(ParamError::Missing { name }) => assert_eq!(name, "name"),
            other => panic!("unexpected: {:?}", other),
        }
        match params.require::<u32>("id") {
            Err(ParamError::Invalid { name, value, .. }) => {
                assert_eq!(name, "id");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn owned_iteration_keeps_order() {
        let params = params_for("/u/:uid/p/:pid", "/u/a/p/b");
        let v: Vec<(String, String)> = params.into_iter().collect();
        assert_eq!(
            v,
            vec![
                ("uid".to_owned(), "a".to_owned()),
                ("pid".to_owned(), "b".to_owned())
            ]
        );
    }
}
