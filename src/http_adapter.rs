//! Glue for hosts built on the `http` crate (hyper, axum, tower).

use crate::constants::header;
use crate::context::RequestContext;
use crate::response::ResponseWriter;
use ::http::header::{HeaderMap, HeaderName, HeaderValue};
use ::http::{Request, Response, StatusCode, response::Parts};

impl<'a> RequestContext<'a> {
    /// Borrows method and CORS request headers. Headers that are not valid
    /// visible ASCII are treated as absent.
    pub fn from_http<B>(request: &'a Request<B>) -> Self {
        let headers = request.headers();
        Self {
            method: request.method().as_str(),
            origin: header_str(headers, header::ORIGIN),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn header_pair(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let name = HeaderName::try_from(name).ok()?;
    let value = HeaderValue::from_str(value).ok()?;
    Some((name, value))
}

fn set_on(map: &mut HeaderMap, name: &str, value: &str) {
    if let Some((name, value)) = header_pair(name, value) {
        map.insert(name, value);
    }
}

fn append_on(map: &mut HeaderMap, name: &str, value: &str) {
    if let Some((name, value)) = header_pair(name, value) {
        map.append(name, value);
    }
}

impl<B> ResponseWriter for Response<B> {
    fn set_header(&mut self, name: &str, value: &str) {
        set_on(self.headers_mut(), name, value);
    }

    fn append_header(&mut self, name: &str, value: &str) {
        append_on(self.headers_mut(), name, value);
    }

    fn set_status(&mut self, status: u16) {
        if let Ok(status) = StatusCode::from_u16(status) {
            *self.status_mut() = status;
        }
    }
}

impl ResponseWriter for Parts {
    fn set_header(&mut self, name: &str, value: &str) {
        set_on(&mut self.headers, name, value);
    }

    fn append_header(&mut self, name: &str, value: &str) {
        append_on(&mut self.headers, name, value);
    }

    fn set_status(&mut self, status: u16) {
        if let Ok(status) = StatusCode::from_u16(status) {
            self.status = status;
        }
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
