use crate::config::{ConfigError, CorsConfig};
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::matcher::{CorsDecision, OriginMatcher};
use crate::options::{CorsOptions, ValidationError};
use crate::origin_list::OriginList;
use crate::preflight::{PreflightResponder, PreflightSpec};
use crate::result::{CorsResult, Evaluation};

/// Cross-origin admission policy shared by every request handler.
///
/// All state is fixed at construction, so one instance can be evaluated from
/// any number of threads at once.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self::from_validated(options))
    }

    /// Builds the service policy from configuration: the configured origins
    /// with the default preflight settings. Placeholder values are refused.
    pub fn from_config(config: &CorsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(CorsOptions::new(config.origin_list())))
    }

    fn from_validated(options: CorsOptions) -> Self {
        match &options.origins {
            OriginList::Disabled => {
                tracing::warn!("no CORS origins configured, CORS handling disabled");
            }
            origins => {
                tracing::info!(
                    allowed_origins = ?origins.iter().collect::<Vec<_>>(),
                    allow_all = origins.is_allow_all(),
                    allow_credentials = options.preflight.allow_credentials,
                    "CORS policy configured"
                );
            }
        }

        Self { options }
    }

    pub fn is_enabled(&self) -> bool {
        self.options.origins.is_enabled()
    }

    pub fn origins(&self) -> &OriginList {
        &self.options.origins
    }

    pub fn preflight_spec(&self) -> &PreflightSpec {
        &self.options.preflight
    }

    /// Matches `origin` against the allow-list.
    pub fn decide(&self, origin: &str) -> CorsDecision {
        OriginMatcher::new(&self.options.origins, self.options.preflight.allow_credentials)
            .decide(origin)
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> Evaluation {
        if !self.is_enabled() {
            return Evaluation::NotApplicable;
        }
        let Some(origin) = request.origin() else {
            return Evaluation::NotApplicable;
        };

        if let Some(result) =
            PreflightResponder::new(&self.options.origins, &self.options.preflight).respond(request)
        {
            return Evaluation::Preflight(result);
        }

        let decision = self.decide(origin);
        tracing::trace!(
            origin,
            method = request.method,
            allowed = decision.allowed,
            "evaluated CORS request"
        );
        if !decision.allowed {
            return Evaluation::NotApplicable;
        }

        Evaluation::Simple(CorsResult {
            headers: self.simple_headers(&decision).into_headers(),
            status: None,
            end_response: false,
        })
    }

    fn simple_headers(&self, decision: &CorsDecision) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(4);
        if let Some(value) = &decision.allow_origin {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.as_str());
        }
        if decision.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if let Some(value) = self.options.exposed_headers_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        if decision.varies_by_origin() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
