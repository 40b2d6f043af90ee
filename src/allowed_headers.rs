use crate::constants::WILDCARD;
use indexmap::IndexSet;

/// Request header names an origin may declare. Matched ASCII-case-insensitively;
/// `*` admits any header.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedHeaders {
    names: IndexSet<String>,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = values
            .into_iter()
            .map(|value| value.into().trim().to_ascii_lowercase())
            .collect();

        Self { names }
    }

    pub fn any() -> Self {
        Self::list([WILDCARD])
    }

    pub fn is_any(&self) -> bool {
        self.names.contains(WILDCARD)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn allows_header(&self, name: &str) -> bool {
        if self.is_any() {
            return true;
        }
        if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
            self.names.contains(name.to_ascii_lowercase().as_str())
        } else {
            self.names.contains(name)
        }
    }

    /// True when every requested name is allowed. An empty request is trivially allowed.
    pub fn allows_headers<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        requested
            .iter()
            .all(|name| self.allows_header(name.as_ref()))
    }

    /// Lower-cased names in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedHeaders {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
