use crate::origin_list::OriginList;

/// Origins longer than this are refused without a lookup.
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

const WILDCARD: &str = "*";

/// Per-request outcome of matching the `Origin` header against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    pub allowed: bool,
    /// Value for `Access-Control-Allow-Origin`, present only when allowed.
    pub allow_origin: Option<String>,
    pub allow_credentials: bool,
}

impl CorsDecision {
    pub fn deny() -> Self {
        Self {
            allowed: false,
            allow_origin: None,
            allow_credentials: false,
        }
    }

    pub fn allow<S: Into<String>>(allow_origin: S, allow_credentials: bool) -> Self {
        Self {
            allowed: true,
            allow_origin: Some(allow_origin.into()),
            allow_credentials,
        }
    }

    /// True when a specific origin is echoed, so responses must carry `Vary: Origin`.
    pub fn varies_by_origin(&self) -> bool {
        self.allow_origin
            .as_deref()
            .is_some_and(|value| value != WILDCARD)
    }
}

/// Decides whether a request origin is admitted by an [`OriginList`].
#[derive(Debug, Clone, Copy)]
pub struct OriginMatcher<'a> {
    origins: &'a OriginList,
    allow_credentials: bool,
}

impl<'a> OriginMatcher<'a> {
    pub fn new(origins: &'a OriginList, allow_credentials: bool) -> Self {
        Self {
            origins,
            allow_credentials,
        }
    }

    pub fn decide(&self, origin: &str) -> CorsDecision {
        // A literal `*` is never a real browser origin and must not be echoed.
        if origin.is_empty() || origin == WILDCARD || origin.len() > MAX_ORIGIN_LENGTH {
            return CorsDecision::deny();
        }

        match self.origins {
            OriginList::Disabled => CorsDecision::deny(),
            // Credentialed responses may not use the wildcard, so the origin is echoed.
            OriginList::AllowAll if self.allow_credentials => CorsDecision::allow(origin, true),
            OriginList::AllowAll => CorsDecision::allow(WILDCARD, false),
            OriginList::Origins(set) if set.contains(origin) => {
                CorsDecision::allow(origin, self.allow_credentials)
            }
            OriginList::Origins(_) => CorsDecision::deny(),
        }
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
