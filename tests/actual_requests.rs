mod common;

use common::asserts::{assert_denied, assert_forwarded, assert_header_absent, assert_header_eq};
use common::builders::{actual_request, policy};
use cors_gate::Decision;
use cors_gate::constants::{header, method};

#[test]
fn allowed_request_is_forwarded_exactly_once() {
    let cors = policy()
        .origin("https://app.dev", [method::GET, method::POST])
        .build();

    let handled = actual_request()
        .origin("https://app.dev")
        .method(method::POST)
        .handle(&cors);

    assert_eq!(handled.decision, Decision::Allowed);
    assert_eq!(handled.forwarded, 1);
    assert_eq!(handled.response.status, None);
    assert_eq!(
        handled.response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some("https://app.dev")
    );
}

#[test]
fn denied_method_is_not_forwarded() {
    let cors = policy().origin("https://app.dev", [method::GET]).build();

    let handled = actual_request()
        .origin("https://app.dev")
        .method(method::DELETE)
        .handle(&cors);

    assert_eq!(handled.decision, Decision::DeniedBadMethod);
    assert_eq!(handled.forwarded, 0);
    assert_eq!(handled.response.status, Some(403));
}

#[test]
fn methods_compare_case_sensitively() {
    let cors = policy().origin("https://app.dev", [method::GET]).build();

    let result = actual_request()
        .origin("https://app.dev")
        .method("get")
        .evaluate(&cors);

    assert_denied(&result, Decision::DeniedBadMethod);
}

#[test]
fn basic_actual_request_discloses_policy_methods() {
    let cors = policy()
        .origin("https://app.dev", [method::GET, method::HEAD])
        .basic()
        .build();

    let result = actual_request().origin("https://app.dev").evaluate(&cors);

    assert_forwarded(&result);
    assert_header_eq(&result, header::ACCESS_CONTROL_ALLOW_METHODS, "GET,HEAD");
}

#[test]
fn extended_actual_request_without_declared_headers_skips_allow_headers() {
    let cors = policy()
        .origin_with_headers("https://app.dev", [method::GET], ["X-Trace"])
        .extended()
        .build();

    let result = actual_request().origin("https://app.dev").evaluate(&cors);

    assert_forwarded(&result);
    assert_header_eq(&result, header::ACCESS_CONTROL_ALLOW_METHODS, method::GET);
    assert_header_absent(&result, header::ACCESS_CONTROL_ALLOW_HEADERS);
}

#[test]
fn basic_actual_request_forwards_despite_declared_headers() {
    let cors = policy()
        .origin("https://app.dev", [method::GET])
        .basic()
        .build();

    let result = actual_request()
        .origin("https://app.dev")
        .request_headers("X-Anything")
        .evaluate(&cors);

    assert_forwarded(&result);
    assert_header_absent(&result, header::ACCESS_CONTROL_ALLOW_HEADERS);
}

#[test]
fn request_without_origin_is_denied_without_wildcard() {
    let cors = policy().origin("https://app.dev", ["*"]).build();

    let result = actual_request().evaluate(&cors);

    assert_denied(&result, Decision::DeniedBadOrigin);
    assert_header_eq(&result, header::ACCESS_CONTROL_ALLOW_ORIGIN, "null");
}
