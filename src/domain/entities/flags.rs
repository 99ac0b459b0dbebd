//! Runtime flags embedded into each artifact's entry HTML
//!
//! The client reads two globals at startup. `AppFlags` is the typed form of
//! the same values, so a router can take it as an explicit parameter.

use serde::{Deserialize, Serialize};

use crate::domain::services::html_patch::{self, BlockSpan};
use crate::domain::value_objects::ArtifactKind;

/// Opening marker line of the flags block
pub const FLAGS_START: &str = "<!-- APP_FLAGS_START -->";
/// Closing marker line of the flags block
pub const FLAGS_END: &str = "<!-- APP_FLAGS_END -->";

const TYPE_GLOBAL: &str = "window.__APP_TYPE__ = ";
const ROUTES_GLOBAL: &str = "window.__BLOCKED_ROUTES__ = ";

/// Artifact type plus the route prefixes the client must refuse to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFlags {
    pub app_type: ArtifactKind,
    pub blocked_routes: Vec<String>,
}

/// Why a flags block could not be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsParseError {
    /// No block in the document
    Missing,
    /// More than one block
    Duplicated(usize),
    /// Marker pair broken
    Malformed(&'static str),
    /// Block present but a global is missing or unparsable
    Invalid(String),
}

impl std::fmt::Display for FlagsParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagsParseError::Missing => write!(f, "no flags block"),
            FlagsParseError::Duplicated(n) => write!(f, "{} flags blocks, expected one", n),
            FlagsParseError::Malformed(msg) => write!(f, "{}", msg),
            FlagsParseError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl AppFlags {
    pub fn new(app_type: ArtifactKind, blocked_routes: Vec<String>) -> Self {
        Self {
            app_type,
            blocked_routes,
        }
    }

    /// Render the delimited block, marker lines included.
    pub fn render_block(&self) -> String {
        let kind = serde_json::Value::from(self.app_type.as_str());
        let routes = serde_json::Value::from(self.blocked_routes.clone());
        format!(
            "{FLAGS_START}\n<script type=\"module\">{TYPE_GLOBAL}{kind}; {ROUTES_GLOBAL}{routes};</script>\n{FLAGS_END}"
        )
    }

    /// Read the flags back out of an HTML document.
    ///
    /// Exactly one well-formed block must be present.
    pub fn parse_block(html: &str) -> Result<Self, FlagsParseError> {
        let span = match html_patch::locate_block(html) {
            BlockSpan::Absent => return Err(FlagsParseError::Missing),
            BlockSpan::Malformed(msg) => return Err(FlagsParseError::Malformed(msg)),
            BlockSpan::Present(span) => span,
        };

        let count = html_patch::count_blocks(html);
        if count > 1 {
            return Err(FlagsParseError::Duplicated(count));
        }

        let inner = &html[span];
        let app_type: String = read_global(inner, TYPE_GLOBAL)?;
        let app_type = ArtifactKind::parse(&app_type).ok_or_else(|| {
            FlagsParseError::Invalid(format!("unknown app type '{}'", app_type))
        })?;
        let blocked_routes: Vec<String> = read_global(inner, ROUTES_GLOBAL)?;

        Ok(Self {
            app_type,
            blocked_routes,
        })
    }

    /// Whether the client must refuse to render `path`.
    ///
    /// A prefix blocks the path itself and everything below it on a segment
    /// boundary. The root prefix `/` blocks only `/`.
    pub fn is_blocked(&self, path: &str) -> bool {
        let path = normalize_route(path);
        self.blocked_routes.iter().any(|prefix| {
            let prefix = normalize_route(prefix);
            if prefix == "/" {
                return path == "/";
            }
            path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Parse the JSON value assigned to `global` inside the block.
fn read_global<T: serde::de::DeserializeOwned>(
    inner: &str,
    global: &str,
) -> Result<T, FlagsParseError> {
    let start = inner
        .find(global)
        .ok_or_else(|| FlagsParseError::Invalid(format!("missing `{}`", global.trim_end())))?;
    let rest = &inner[start + global.len()..];

    serde_json::Deserializer::from_str(rest)
        .into_iter::<T>()
        .next()
        .ok_or_else(|| FlagsParseError::Invalid(format!("empty `{}`", global.trim_end())))?
        .map_err(|e| FlagsParseError::Invalid(format!("`{}` {}", global.trim_end(), e)))
}

/// Strip query and fragment, collapse trailing slashes, default to `/`.
fn normalize_route(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
