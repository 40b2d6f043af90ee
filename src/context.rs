use crate::constants::method;
use crate::util::split_header_list;

/// Request facts supplied by the host for a single evaluation.
///
/// Absent headers are `None`; the host decides how to decode raw header bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestContext<'_> {
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
    }
}

/// What a single request asks of the policy. Lives for one evaluation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext<'a> {
    /// Declared origin, or `""` when the request carried none.
    pub origin: &'a str,
    /// The method under evaluation: the probed method on preflight, the request's own otherwise.
    pub method: &'a str,
    pub requested_headers: Vec<&'a str>,
    pub preflight: bool,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(request: &RequestContext<'a>) -> Self {
        let preflight = request.is_preflight();
        let method = if preflight {
            // Absent or blank probe header: evaluate the request's own method.
            request
                .access_control_request_method
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(request.method)
        } else {
            request.method
        };

        Self {
            origin: request.origin.unwrap_or_default(),
            method,
            requested_headers: request
                .access_control_request_headers
                .map(split_header_list)
                .unwrap_or_default(),
            preflight,
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
