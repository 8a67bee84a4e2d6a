//! Allow-list driven CORS admission for HTTP services.
//!
//! A [`CorsPolicy`] is built once from configuration and shared by every
//! request. It answers preflight requests itself and tells the caller which
//! headers to attach to everything else; [`with_cors`] wraps a plain
//! `http` handler with that behaviour.

pub mod constants;

mod allowed_headers;
mod config;
mod context;
mod headers;
mod matcher;
mod middleware;
mod options;
mod origin_list;
mod policy;
mod preflight;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use headers::Headers;
pub use matcher::{CorsDecision, OriginMatcher};
pub use middleware::{
    CorsHandler, Handler, HandlerFn, apply_headers, handler_fn, preflight_response, with_cors,
};
pub use options::{CorsOptions, ValidationError};
pub use origin_list::{MalformedOrigin, OriginList, OriginValidation, ParsedOrigins};
pub use policy::CorsPolicy;
pub use preflight::{PREFLIGHT_STATUS, PreflightResponder, PreflightSpec};
pub use result::{CorsResult, Evaluation};
