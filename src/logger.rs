use crate::context::EvaluationContext;
use crate::result::Decision;

/// Logging capability injected into [`crate::Cors`].
pub trait CorsLogger: Send + Sync {
    /// Called once for every refused request.
    fn denied(&self, decision: Decision, context: &EvaluationContext<'_>);

    fn allowed(&self, _context: &EvaluationContext<'_>) {}
}

/// Emits events through `tracing` under the `cors_gate` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CorsLogger for TracingLogger {
    fn denied(&self, decision: Decision, context: &EvaluationContext<'_>) {
        tracing::warn!(
            target: "cors_gate",
            origin = context.origin,
            method = context.method,
            preflight = context.preflight,
            reason = decision.reason(),
            "Request Blocked by CORS: {}",
            decision
        );
    }

    fn allowed(&self, context: &EvaluationContext<'_>) {
        tracing::debug!(
            target: "cors_gate",
            origin = context.origin,
            method = context.method,
            preflight = context.preflight,
            "request allowed by CORS"
        );
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl CorsLogger for NoopLogger {
    fn denied(&self, _decision: Decision, _context: &EvaluationContext<'_>) {}
}

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;
