use crate::constants::status;
use thiserror::Error;

/// Whether the declared request header list is checked against the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderCheck {
    /// Origin and method only.
    Disabled,
    /// Origin, method, then requested headers.
    #[default]
    Enabled,
}

/// What `Access-Control-Allow-Methods` discloses on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MethodsDisclosure {
    /// Every method configured for the matching origin, comma-joined.
    Policy,
    /// Only the method under evaluation.
    #[default]
    Requested,
}

/// Capability set the evaluator runs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub header_check: HeaderCheck,
    pub methods_disclosure: MethodsDisclosure,
    pub preflight_success_status: u16,
}

impl CorsOptions {
    /// Origin + method checks, full method list disclosed.
    pub fn basic() -> Self {
        Self {
            header_check: HeaderCheck::Disabled,
            methods_disclosure: MethodsDisclosure::Policy,
            preflight_success_status: status::OK,
        }
    }

    /// Origin + method + header checks, only the evaluated method disclosed.
    pub fn extended() -> Self {
        Self {
            header_check: HeaderCheck::Enabled,
            methods_disclosure: MethodsDisclosure::Requested,
            preflight_success_status: status::OK,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(200..=299).contains(&self.preflight_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.preflight_success_status,
            ));
        }
        Ok(())
    }
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self::extended()
    }
}

/// Configuration problems detected before any request is evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("must supply at least one origin or '*'")]
    EmptyPolicy,
    #[error("origin keys must not be empty; use '*' to match any origin")]
    EmptyOrigin,
    #[error("preflight success status must be in the 2xx range, got {0}")]
    InvalidSuccessStatus(u16),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
