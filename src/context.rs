use crate::constants::{header, method};
use http::{HeaderMap, Request};

/// Borrowed view of the request fields the CORS layer looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Builds a context from an `http` request. Header values that are not
    /// visible ASCII are treated as absent.
    pub fn from_request<B>(request: &'a Request<B>) -> Self {
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

    /// Request origin, with an empty header value treated as missing.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.trim().is_empty())
    }

    /// `OPTIONS` carrying a non-blank `Access-Control-Request-Method`.
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
            && self
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
