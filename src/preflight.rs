use crate::allowed_headers::AllowedHeaders;
use crate::constants::{DEFAULT_MAX_AGE_SECONDS, header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::matcher::{CorsDecision, OriginMatcher};
use crate::origin_list::OriginList;
use crate::result::CorsResult;

/// Status answered to every preflight, allowed or not.
pub const PREFLIGHT_STATUS: u16 = 204;

/// Static description of what a preflight response advertises.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreflightSpec {
    pub allowed_methods: Vec<String>,
    pub allowed_headers: AllowedHeaders,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for PreflightSpec {
    fn default() -> Self {
        Self {
            allowed_methods: vec![
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::PATCH.into(),
                method::DELETE.into(),
                method::OPTIONS.into(),
            ],
            allowed_headers: AllowedHeaders::default(),
            allow_credentials: true,
            max_age_seconds: DEFAULT_MAX_AGE_SECONDS,
        }
    }
}

impl PreflightSpec {
    pub fn methods_header_value(&self) -> Option<String> {
        if self.allowed_methods.is_empty() {
            None
        } else {
            Some(self.allowed_methods.join(", "))
        }
    }
}

/// Answers preflight requests on behalf of the application.
pub struct PreflightResponder<'a> {
    origins: &'a OriginList,
    spec: &'a PreflightSpec,
}

impl<'a> PreflightResponder<'a> {
    pub fn new(origins: &'a OriginList, spec: &'a PreflightSpec) -> Self {
        Self { origins, spec }
    }

    /// Returns `None` when the request is not a preflight and must reach the
    /// application unchanged.
    pub fn respond(&self, request: &RequestContext<'_>) -> Option<CorsResult> {
        if !request.is_preflight() {
            return None;
        }
        let origin = request.origin()?;

        let decision =
            OriginMatcher::new(self.origins, self.spec.allow_credentials).decide(origin);
        tracing::trace!(
            origin,
            allowed = decision.allowed,
            requested_method = request.access_control_request_method,
            "answering CORS preflight"
        );

        let headers = if decision.allowed {
            self.allowed_headers(&decision, request)
        } else {
            HeaderCollection::new()
        };

        Some(CorsResult {
            headers: headers.into_headers(),
            status: Some(PREFLIGHT_STATUS),
            end_response: true,
        })
    }

    fn allowed_headers(
        &self,
        decision: &CorsDecision,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(6);
        if let Some(value) = &decision.allow_origin {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.as_str());
        }
        if let Some(value) = self.spec.methods_header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        if let Some(value) = self
            .spec
            .allowed_headers
            .header_value(request.access_control_request_headers)
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        if matches!(self.spec.allowed_headers, AllowedHeaders::MirrorRequest) {
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
        if decision.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.spec.max_age_seconds.to_string(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
