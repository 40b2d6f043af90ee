use crate::constants::header;
use crate::headers::Headers;
use crate::response::ResponseWriter;
use std::fmt;

/// Outcome of evaluating one request against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allowed,
    DeniedBadOrigin,
    DeniedBadMethod,
    DeniedBadHeaders,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn is_denied(self) -> bool {
        !self.is_allowed()
    }

    /// Short tag used in logs.
    pub fn reason(self) -> &'static str {
        match self {
            Decision::Allowed => "allowed",
            Decision::DeniedBadOrigin => "bad origin",
            Decision::DeniedBadMethod => "bad method",
            Decision::DeniedBadHeaders => "bad headers",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Everything the host needs to finish the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub decision: Decision,
    pub headers: Headers,
    /// Status to write, or `None` when the next stage owns the status.
    pub status: Option<u16>,
    /// Whether the request continues to the next pipeline stage.
    pub forward: bool,
}

impl CorsResult {
    /// Writes headers and status. `Vary` is appended so existing tokens survive.
    pub fn apply_to<W: ResponseWriter + ?Sized>(&self, response: &mut W) {
        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case(header::VARY) {
                response.append_header(name, value);
            } else {
                response.set_header(name, value);
            }
        }
        if let Some(status) = self.status {
            response.set_status(status);
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
