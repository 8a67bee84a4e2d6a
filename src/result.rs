use crate::headers::Headers;

/// Headers and response metadata emitted for either a preflight or simple request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Status to answer with when the response is produced by the CORS layer.
    pub status: Option<u16>,
    /// When true, the request must not reach the application handler.
    pub end_response: bool,
}

/// Overall outcome of evaluating a request against the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Answer directly; the application handler is skipped.
    Preflight(CorsResult),
    /// Run the application handler, then attach these headers.
    Simple(CorsResult),
    /// Run the application handler and leave its response untouched.
    NotApplicable,
}

impl Evaluation {
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Evaluation::Preflight(result) | Evaluation::Simple(result) => Some(&result.headers),
            Evaluation::NotApplicable => None,
        }
    }

    pub fn ends_response(&self) -> bool {
        matches!(self, Evaluation::Preflight(result) if result.end_response)
    }
}
