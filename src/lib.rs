pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod config;
mod context;
mod cors;
mod headers;
#[cfg(feature = "http")]
mod http_adapter;
mod logger;
mod options;
mod policy;
mod response;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{OriginConfig, PolicyConfig};
pub use context::{EvaluationContext, RequestContext};
pub use cors::Cors;
pub use headers::Headers;
pub use logger::{CorsLogger, NoopLogger, TracingLogger};
pub use options::{CorsOptions, HeaderCheck, MethodsDisclosure, ValidationError};
pub use policy::{OriginRule, Policy};
pub use response::{BufferedResponse, ResponseWriter};
pub use result::{CorsResult, Decision};
