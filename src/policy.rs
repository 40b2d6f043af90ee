use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::WILDCARD;
use crate::options::ValidationError;
use indexmap::IndexMap;

/// What a single configured origin may do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OriginRule {
    pub methods: AllowedMethods,
    pub headers: AllowedHeaders,
}

impl OriginRule {
    pub fn new(methods: AllowedMethods, headers: AllowedHeaders) -> Self {
        Self { methods, headers }
    }

    /// A rule that names methods only; no request headers are admitted.
    pub fn methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(AllowedMethods::list(methods), AllowedHeaders::default())
    }

    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = AllowedHeaders::list(headers);
        self
    }
}

/// Immutable origin → rule mapping.
///
/// Every origin-scoped lookup goes through [`Policy::rule_for`]: the exact
/// origin entry if present, otherwise the `*` entry. The wildcard entry is a
/// fallback and is never merged with an exact entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    rules: IndexMap<String, OriginRule>,
}

impl Policy {
    pub fn new(rules: IndexMap<String, OriginRule>) -> Result<Self, ValidationError> {
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Builds a policy from origin → method token lists.
    pub fn from_methods<I, O, M, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (O, M)>,
        O: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_rules(
            entries
                .into_iter()
                .map(|(origin, methods)| (origin, OriginRule::methods(methods))),
        )
    }

    pub fn from_rules<I, O>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (O, OriginRule)>,
        O: Into<String>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(origin, rule)| (origin.into(), rule))
                .collect(),
        )
    }

    fn validate(rules: &IndexMap<String, OriginRule>) -> Result<(), ValidationError> {
        if rules.is_empty() {
            return Err(ValidationError::EmptyPolicy);
        }
        if rules.contains_key("") {
            return Err(ValidationError::EmptyOrigin);
        }
        Ok(())
    }

    /// Exact entry first, then the wildcard entry.
    pub fn rule_for(&self, origin: &str) -> Option<&OriginRule> {
        self.rules.get(origin).or_else(|| self.rules.get(WILDCARD))
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.rule_for(origin).is_some()
    }

    pub fn allowed_methods(&self, origin: &str) -> Option<&AllowedMethods> {
        self.rule_for(origin).map(|rule| &rule.methods)
    }

    pub fn is_method_allowed(&self, method: &str, origin: &str) -> bool {
        self.allowed_methods(origin)
            .is_some_and(|methods| methods.allows_method(method))
    }

    pub fn allowed_headers(&self, origin: &str) -> Option<&AllowedHeaders> {
        self.rule_for(origin).map(|rule| &rule.headers)
    }

    pub fn are_headers_allowed<S: AsRef<str>>(&self, headers: &[S], origin: &str) -> bool {
        if headers.is_empty() {
            return true;
        }
        self.allowed_headers(origin)
            .is_some_and(|allowed| allowed.allows_headers(headers))
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a constructed policy.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
