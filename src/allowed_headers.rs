use crate::constants::header;
use crate::util::split_list;
use std::collections::HashSet;

/// Source of the `Access-Control-Allow-Headers` preflight value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    /// Fixed list, emitted in configured order.
    List(Vec<String>),
    /// Echo the names listed in `Access-Control-Request-Headers`.
    MirrorRequest,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
    }
}

impl AllowedHeaders {
    /// Builds a list, trimming entries and dropping blanks and
    /// case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_ascii_lowercase()) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn mirror_request() -> Self {
        Self::MirrorRequest
    }

    /// Header value for a preflight carrying `request_headers`, if any.
    pub fn header_value(&self, request_headers: Option<&str>) -> Option<String> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
            Self::MirrorRequest => {
                let requested: Vec<&str> =
                    split_list(request_headers.unwrap_or_default()).collect();
                if requested.is_empty() {
                    None
                } else {
                    Some(requested.join(", "))
                }
            }
        }
    }

    pub(crate) fn names(&self) -> &[String] {
        match self {
            Self::List(values) => values,
            Self::MirrorRequest => &[],
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
