use crate::util::split_list;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use thiserror::Error;

/// `scheme://host[:port]` with no path, query, fragment, userinfo or whitespace.
static ORIGIN_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#@]+$")
        .expect("origin syntax pattern is valid")
});

const WILDCARD: &str = "*";

/// Allow-list of origins permitted to make cross-origin requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginList {
    /// No origins configured: CORS headers are never emitted.
    #[default]
    Disabled,
    /// The configuration contained `*`.
    AllowAll,
    Origins(IndexSet<String>),
}

/// How configured entries are checked before being admitted to the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginValidation {
    /// Entries must look like `scheme://host[:port]`.
    #[default]
    Strict,
    /// Any non-empty token is accepted, after trailing-slash removal.
    Lenient,
}

/// A configured entry that was skipped because it is not a valid origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed origin {entry:?}: expected scheme://host[:port]")]
pub struct MalformedOrigin {
    pub entry: String,
}

/// Result of parsing, including the entries that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOrigins {
    pub list: OriginList,
    pub rejected: Vec<MalformedOrigin>,
}

impl OriginList {
    /// Parses a comma-separated allow-list using [`OriginValidation::Strict`].
    ///
    /// Malformed entries are logged and dropped; they never disable the
    /// remaining valid origins.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, OriginValidation::Strict).list
    }

    pub fn parse_with(raw: &str, validation: OriginValidation) -> ParsedOrigins {
        let mut origins = IndexSet::new();
        let mut rejected = Vec::new();
        let mut wildcard = false;

        for entry in split_list(raw) {
            if entry == WILDCARD {
                wildcard = true;
                continue;
            }

            let normalized = normalize(entry);
            let accepted = match validation {
                OriginValidation::Strict => is_valid_origin(normalized),
                OriginValidation::Lenient => !normalized.is_empty(),
            };
            if !accepted {
                tracing::warn!(entry, "skipping malformed CORS origin");
                rejected.push(MalformedOrigin {
                    entry: entry.to_string(),
                });
                continue;
            }

            origins.insert(normalized.to_string());
        }

        let list = if wildcard {
            if !origins.is_empty() {
                tracing::info!(
                    ignored = origins.len(),
                    "wildcard origin configured; explicit origins are redundant"
                );
            }
            OriginList::AllowAll
        } else if origins.is_empty() {
            OriginList::Disabled
        } else {
            OriginList::Origins(origins)
        };

        ParsedOrigins { list, rejected }
    }

    pub fn allow_all() -> Self {
        Self::AllowAll
    }

    /// Builds an explicit list without syntax checks.
    pub fn origins<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: IndexSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Self::Disabled
        } else {
            Self::Origins(set)
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, OriginList::Disabled)
    }

    pub fn is_allow_all(&self) -> bool {
        matches!(self, OriginList::AllowAll)
    }

    /// Exact, case-sensitive membership. `AllowAll` contains every non-empty origin.
    pub fn contains(&self, origin: &str) -> bool {
        match self {
            OriginList::Disabled => false,
            OriginList::AllowAll => !origin.is_empty(),
            OriginList::Origins(set) => set.contains(origin),
        }
    }

    /// Number of explicit origins; zero for the wildcard and disabled forms.
    pub fn len(&self) -> usize {
        match self {
            OriginList::Origins(set) => set.len(),
            _ => 0,
        }
    }

    /// True when no explicit origin is listed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let set = match self {
            OriginList::Origins(set) => Some(set),
            _ => None,
        };
        set.into_iter().flatten().map(String::as_str)
    }
}

fn normalize(entry: &str) -> &str {
    entry.strip_suffix('/').unwrap_or(entry)
}

// Also rejects the opaque `null` origin.
fn is_valid_origin(entry: &str) -> bool {
    ORIGIN_SYNTAX.is_match(entry)
}

#[cfg(test)]
#[path = "origin_list_test.rs"]
mod origin_list_test;
