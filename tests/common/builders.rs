#![allow(dead_code)]

use origin_cors::constants::method;
use origin_cors::{
    AllowedHeaders, CorsOptions, CorsPolicy, Evaluation, OriginList, PreflightSpec,
    RequestContext,
};

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<OriginList>,
    methods: Option<Vec<String>>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<Vec<String>>,
    credentials: Option<bool>,
    max_age: Option<u64>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `raw` the way the service configuration is parsed.
    pub fn allowed_origins(mut self, raw: &str) -> Self {
        self.origins = Some(OriginList::parse(raw));
        self
    }

    pub fn origins(mut self, origins: OriginList) -> Self {
        self.origins = Some(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let CorsOptions {
            origins: default_origins,
            preflight: default_preflight,
            exposed_headers: default_exposed_headers,
        } = CorsOptions::default();
        let PreflightSpec {
            allowed_methods: default_methods,
            allowed_headers: default_allowed_headers,
            allow_credentials: default_credentials,
            max_age_seconds: default_max_age,
        } = default_preflight;

        CorsPolicy::new(CorsOptions {
            origins: self.origins.unwrap_or(default_origins),
            preflight: PreflightSpec {
                allowed_methods: self.methods.unwrap_or(default_methods),
                allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
                allow_credentials: self.credentials.unwrap_or(default_credentials),
                max_age_seconds: self.max_age.unwrap_or(default_max_age),
            },
            exposed_headers: self.exposed_headers.unwrap_or(default_exposed_headers),
        })
        .expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
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

    pub fn evaluate(self, policy: &CorsPolicy) -> Evaluation {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        policy.evaluate(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
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

    pub fn evaluate(self, policy: &CorsPolicy) -> Evaluation {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        policy.evaluate(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
