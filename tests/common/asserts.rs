use cors_gate::constants::header;
use cors_gate::{CorsResult, Decision};

pub fn assert_header_eq(result: &CorsResult, name: &str, expected: &str) {
    assert_eq!(
        result.header(name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_header_absent(result: &CorsResult, name: &str) {
    assert!(
        result.header(name).is_none(),
        "expected header {name} to be absent, got {:?}",
        result.header(name)
    );
}

pub fn assert_allowed_preflight(result: &CorsResult) {
    assert_eq!(result.decision, Decision::Allowed, "expected allowed preflight");
    assert_eq!(result.status, Some(200));
    assert!(!result.forward, "preflight must never be forwarded");
}

pub fn assert_forwarded(result: &CorsResult) {
    assert_eq!(result.decision, Decision::Allowed, "expected allowed request");
    assert_eq!(result.status, None);
    assert!(result.forward, "allowed actual request must be forwarded");
}

pub fn assert_denied(result: &CorsResult, expected: Decision) {
    assert_eq!(result.decision, expected);
    assert_eq!(result.status, Some(403));
    assert!(!result.forward, "denied request must not be forwarded");
    assert_header_eq(result, header::VARY, header::ORIGIN);
}
