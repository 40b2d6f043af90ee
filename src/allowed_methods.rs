use crate::constants::WILDCARD;
use indexmap::IndexSet;

/// Method tokens an origin may use. Case-sensitive; `*` admits any method.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedMethods {
    methods: IndexSet<String>,
}

impl AllowedMethods {
    /// Construct from configured tokens, keeping the first occurrence of duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The wildcard set (`["*"]`).
    pub fn any() -> Self {
        Self::list([WILDCARD])
    }

    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.contains(method) || self.is_any()
    }

    pub fn is_any(&self) -> bool {
        self.methods.contains(WILDCARD)
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    /// Comma-joined configured tokens, in configuration order.
    pub fn header_value(&self) -> Option<String> {
        if self.methods.is_empty() {
            return None;
        }
        Some(self.iter().collect::<Vec<_>>().join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedMethods {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
