use crate::observations::error::ObservationsError;
use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const CSV_CONTENT_TYPE: &str = "text/plain";

/// A hypermedia link exposed by every node of the observations API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub href: String,
}

/// Returns the target of the first link whose content type equals `content_type`.
///
/// Links are searched in declaration order.
///
/// # Errors
///
/// [`ObservationsError::NoMatchingLink`] when no link has the requested type.
///
/// ```
/// use smhi::{resolve_link, Link};
///
/// let links = vec![
///     Link { rel: "data".into(), content_type: "application/xml".into(), href: "a.xml".into() },
///     Link { rel: "data".into(), content_type: "application/json".into(), href: "a.json".into() },
/// ];
/// assert_eq!(resolve_link(&links, "application/json").unwrap(), "a.json");
/// assert!(resolve_link(&links, "text/plain").is_err());
/// ```
pub fn resolve_link<'a>(links: &'a [Link], content_type: &str) -> Result<&'a str, ObservationsError> {
    find_link(links, content_type)
        .map(|link| link.href.as_str())
        .ok_or_else(|| ObservationsError::NoMatchingLink(content_type.to_string()))
}

/// Returns the first link of the first content type in `content_types` that
/// any link carries.
pub(crate) fn resolve_preferred_link<'a>(
    links: &'a [Link],
    content_types: &[&str],
) -> Result<&'a Link, ObservationsError> {
    content_types
        .iter()
        .find_map(|content_type| find_link(links, content_type))
        .ok_or_else(|| ObservationsError::NoMatchingLink(content_types.join(" or ")))
}

fn find_link<'a>(links: &'a [Link], content_type: &str) -> Option<&'a Link> {
    links.iter().find(|link| link.content_type == content_type)
}
