use crate::context::RequestContext;
use crate::headers::Headers;
use crate::policy::CorsPolicy;
use crate::result::{CorsResult, Evaluation};
use crate::util::split_list;
use http::{HeaderMap, HeaderName, HeaderValue, Request, Response, StatusCode};
use std::sync::Arc;

/// A synchronous request handler: `handle(request) -> response`.
pub trait Handler<B> {
    type Body;

    fn handle(&self, request: Request<B>) -> Response<Self::Body>;
}

/// Adapts a closure into a [`Handler`].
#[derive(Clone, Copy, Debug)]
pub struct HandlerFn<F>(F);

pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn(f)
}

impl<F, B, R> Handler<B> for HandlerFn<F>
where
    F: Fn(Request<B>) -> Response<R>,
{
    type Body = R;

    fn handle(&self, request: Request<B>) -> Response<R> {
        (self.0)(request)
    }
}

/// Wraps `inner` so every request passes through `policy` first.
pub fn with_cors<H>(policy: Arc<CorsPolicy>, inner: H) -> CorsHandler<H> {
    CorsHandler::new(policy, inner)
}

/// Handler that answers preflights itself and decorates the inner
/// handler's responses with CORS headers.
#[derive(Clone, Debug)]
pub struct CorsHandler<H> {
    policy: Arc<CorsPolicy>,
    inner: H,
}

impl<H> CorsHandler<H> {
    pub fn new(policy: Arc<CorsPolicy>, inner: H) -> Self {
        Self { policy, inner }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H, B> Handler<B> for CorsHandler<H>
where
    H: Handler<B>,
    H::Body: Default,
{
    type Body = H::Body;

    fn handle(&self, request: Request<B>) -> Response<H::Body> {
        let evaluation = self.policy.evaluate(&RequestContext::from_request(&request));

        match evaluation {
            Evaluation::Preflight(result) => preflight_response(result),
            Evaluation::Simple(result) => {
                let mut response = self.inner.handle(request);
                apply_headers(response.headers_mut(), &result.headers);
                response
            }
            Evaluation::NotApplicable => self.inner.handle(request),
        }
    }
}

/// Builds the short-circuit response for a preflight result.
pub fn preflight_response<T: Default>(result: CorsResult) -> Response<T> {
    let mut response = Response::new(T::default());
    *response.status_mut() = result
        .status
        .and_then(|status| StatusCode::from_u16(status).ok())
        .unwrap_or(StatusCode::NO_CONTENT);
    apply_headers(response.headers_mut(), &result.headers);
    response
}

/// Inserts `headers` into `map`, replacing existing values of the same name.
/// `Vary` is merged instead so the application's own entries survive.
pub fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let Ok(header_name) = HeaderName::try_from(name.as_str()) else {
            tracing::debug!(header = %name, "dropping CORS header that is not valid HTTP");
            continue;
        };

        if header_name == http::header::VARY {
            append_vary(map, value);
            continue;
        }

        match HeaderValue::from_str(value) {
            Ok(header_value) => {
                map.insert(header_name, header_value);
            }
            Err(_) => {
                tracing::debug!(header = %name, "dropping CORS header that is not valid HTTP");
            }
        }
    }
}

/// Appends the `Vary` entries of `value` that `map` does not already list,
/// compared case-insensitively.
fn append_vary(map: &mut HeaderMap, value: &str) {
    let missing: Vec<&str> = split_list(value)
        .filter(|entry| {
            !map.get_all(http::header::VARY)
                .iter()
                .filter_map(|existing| existing.to_str().ok())
                .flat_map(split_list)
                .any(|existing| existing.eq_ignore_ascii_case(entry))
        })
        .collect();

    if missing.is_empty() {
        return;
    }

    match HeaderValue::from_str(&missing.join(", ")) {
        Ok(header_value) => {
            map.append(http::header::VARY, header_value);
        }
        Err(_) => {
            tracing::debug!(value, "dropping Vary entries that are not valid HTTP");
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
