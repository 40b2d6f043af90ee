use crate::options::ValidationError;
use crate::policy::{OriginRule, Policy};
use indexmap::IndexMap;

/// One origin's entry as a config loader hands it over: either a bare list
/// of methods or methods together with request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OriginConfig {
    Methods(Vec<String>),
    Rules {
        methods: Vec<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        headers: Vec<String>,
    },
}

/// Already-parsed origin → entry mapping, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PolicyConfig {
    pub origins: IndexMap<String, OriginConfig>,
}

impl From<OriginConfig> for OriginRule {
    fn from(config: OriginConfig) -> Self {
        match config {
            OriginConfig::Methods(methods) => OriginRule::methods(methods),
            OriginConfig::Rules { methods, headers } => {
                OriginRule::methods(methods).with_headers(headers)
            }
        }
    }
}

impl TryFrom<PolicyConfig> for Policy {
    type Error = ValidationError;

    fn try_from(config: PolicyConfig) -> Result<Self, Self::Error> {
        Policy::from_rules(
            config
                .origins
                .into_iter()
                .map(|(origin, entry)| (origin, OriginRule::from(entry))),
        )
    }
}

impl<O: Into<String>> FromIterator<(O, OriginConfig)> for PolicyConfig {
    fn from_iter<I: IntoIterator<Item = (O, OriginConfig)>>(iter: I) -> Self {
        Self {
            origins: iter
                .into_iter()
                .map(|(origin, entry)| (origin.into(), entry))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
