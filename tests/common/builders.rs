use cors_gate::constants::method;
use cors_gate::{
    BufferedResponse, Cors, CorsOptions, CorsResult, Decision, NoopLogger, OriginRule, Policy,
    RequestContext,
};
use std::sync::Arc;

#[derive(Default)]
pub struct PolicyBuilder {
    rules: Vec<(String, OriginRule)>,
    options: Option<CorsOptions>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin<I, S>(mut self, origin: &str, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .push((origin.to_string(), OriginRule::methods(methods)));
        self
    }

    pub fn origin_with_headers<I, S, H, T>(mut self, origin: &str, methods: I, headers: H) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        H: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.rules.push((
            origin.to_string(),
            OriginRule::methods(methods).with_headers(headers),
        ));
        self
    }

    pub fn options(mut self, options: CorsOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn basic(self) -> Self {
        self.options(CorsOptions::basic())
    }

    pub fn extended(self) -> Self {
        self.options(CorsOptions::extended())
    }

    pub fn build(self) -> Cors {
        Cors::with_logger(
            Policy::from_rules(self.rules).expect("valid policy"),
            self.options.unwrap_or_default(),
            Arc::new(NoopLogger),
        )
        .expect("valid CORS configuration")
    }
}

/// Outcome of running a request through `Cors::handle`.
pub struct Handled {
    pub decision: Decision,
    pub response: BufferedResponse,
    pub forwarded: usize,
}

#[derive(Clone)]
pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        }
    }

    pub fn evaluate(&self, cors: &Cors) -> CorsResult {
        cors.evaluate(&self.context())
    }

    pub fn handle(&self, cors: &Cors) -> Handled {
        let mut response = BufferedResponse::new();
        let mut forwarded = 0;
        let decision = cors.handle(&self.context(), &mut response, |_| forwarded += 1);
        Handled {
            decision,
            response,
            forwarded,
        }
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}
