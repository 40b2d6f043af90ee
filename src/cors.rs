use crate::constants::{NULL_ORIGIN, header, status};
use crate::context::{EvaluationContext, RequestContext};
use crate::headers::HeaderCollection;
use crate::logger::{CorsLogger, TracingLogger};
use crate::options::{CorsOptions, HeaderCheck, MethodsDisclosure, ValidationError};
use crate::policy::Policy;
use crate::response::ResponseWriter;
use crate::result::{CorsResult, Decision};
use std::fmt;
use std::sync::Arc;

/// CORS request evaluator: checks one request against a [`Policy`] and
/// produces the response headers, status and forwarding decision.
///
/// Holds no per-request state; share it behind an `Arc` across threads.
pub struct Cors {
    policy: Policy,
    options: CorsOptions,
    logger: Arc<dyn CorsLogger>,
}

impl Cors {
    pub fn new(policy: Policy, options: CorsOptions) -> Result<Self, ValidationError> {
        Self::with_logger(policy, options, Arc::new(TracingLogger))
    }

    pub fn with_logger(
        policy: Policy,
        options: CorsOptions,
        logger: Arc<dyn CorsLogger>,
    ) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self {
            policy,
            options,
            logger,
        })
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Evaluates `request` without touching any response.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsResult {
        let context = EvaluationContext::new(request);
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ORIGIN);

        let decision = self.check(&context);
        if decision.is_denied() {
            self.logger.denied(decision, &context);
            self.write_denial_headers(&mut headers, decision, &context);
            return CorsResult {
                decision,
                headers: headers.into_headers(),
                status: Some(status::FORBIDDEN),
                forward: false,
            };
        }

        self.logger.allowed(&context);
        self.write_allow_headers(&mut headers, &context);

        let (status, forward) = if context.preflight {
            (Some(self.options.preflight_success_status), false)
        } else {
            (None, true)
        };

        CorsResult {
            decision,
            headers: headers.into_headers(),
            status,
            forward,
        }
    }

    /// Evaluates `request`, writes the outcome to `response`, and hands the
    /// response to `next` only for allowed non-preflight requests.
    pub fn handle<W, F>(&self, request: &RequestContext<'_>, response: &mut W, next: F) -> Decision
    where
        W: ResponseWriter + ?Sized,
        F: FnOnce(&mut W),
    {
        let result = self.evaluate(request);
        result.apply_to(response);
        if result.forward {
            next(response);
        }
        result.decision
    }

    /// Origin, then method, then (when enabled) headers. First failure wins.
    fn check(&self, context: &EvaluationContext<'_>) -> Decision {
        if !self.policy.is_origin_allowed(context.origin) {
            return Decision::DeniedBadOrigin;
        }
        if !self.policy.is_method_allowed(context.method, context.origin) {
            return Decision::DeniedBadMethod;
        }
        if self.options.header_check == HeaderCheck::Enabled
            && !self
                .policy
                .are_headers_allowed(&context.requested_headers, context.origin)
        {
            return Decision::DeniedBadHeaders;
        }
        Decision::Allowed
    }

    fn write_denial_headers(
        &self,
        headers: &mut HeaderCollection,
        decision: Decision,
        context: &EvaluationContext<'_>,
    ) {
        match decision {
            Decision::DeniedBadOrigin => {
                headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, NULL_ORIGIN);
            }
            // The origin itself was acceptable; only the capability was refused.
            Decision::DeniedBadMethod | Decision::DeniedBadHeaders => {
                Self::write_origin(headers, context);
            }
            Decision::Allowed => {}
        }
    }

    fn write_allow_headers(&self, headers: &mut HeaderCollection, context: &EvaluationContext<'_>) {
        Self::write_origin(headers, context);

        let methods = match self.options.methods_disclosure {
            MethodsDisclosure::Policy => self
                .policy
                .allowed_methods(context.origin)
                .and_then(|methods| methods.header_value()),
            MethodsDisclosure::Requested => Some(context.method.to_string()),
        };
        if let Some(methods) = methods {
            headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        }

        if self.options.header_check == HeaderCheck::Enabled
            && !context.requested_headers.is_empty()
        {
            headers.set(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                context.requested_headers.join(","),
            );
        }
    }

    /// Echoes the literal requesting origin, never the wildcard entry that matched it.
    fn write_origin(headers: &mut HeaderCollection, context: &EvaluationContext<'_>) {
        if !context.origin.is_empty() {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, context.origin);
        }
    }
}

impl fmt::Debug for Cors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cors")
            .field("policy", &self.policy)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
