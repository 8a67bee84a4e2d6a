use crate::constants::header;
use crate::origin_list::OriginList;
use crate::preflight::PreflightSpec;
use crate::util::is_http_token;
use thiserror::Error;

/// Everything needed to build a [`CorsPolicy`](crate::CorsPolicy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub origins: OriginList,
    pub preflight: PreflightSpec,
    /// Response headers scripts may read on actual (non-preflight) responses.
    pub exposed_headers: Vec<String>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: OriginList::Disabled,
            preflight: PreflightSpec::default(),
            exposed_headers: vec![header::CONTENT_LENGTH.into()],
        }
    }
}

impl CorsOptions {
    pub fn new(origins: OriginList) -> Self {
        Self {
            origins,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(method) = self
            .preflight
            .allowed_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self
            .preflight
            .allowed_headers
            .names()
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        if let Some(name) = self
            .exposed_headers
            .iter()
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidExposedHeader(name.clone()));
        }

        Ok(())
    }

    pub(crate) fn exposed_headers_value(&self) -> Option<String> {
        if self.exposed_headers.is_empty() {
            None
        } else {
            Some(self.exposed_headers.join(", "))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed method {0:?} is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("allowed header {0:?} is not a valid HTTP header name")]
    InvalidHeaderName(String),
    #[error("exposed header {0:?} is not a valid HTTP header name")]
    InvalidExposedHeader(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
