//! Relative link rewriting for fetched READMEs.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches the target of any markdown link or image reference: `](target)`.
static LINK_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^)]*)\)").expect("Invalid link target regex"));

/// Matches a URL scheme prefix such as `https:` or `mailto:`.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").expect("Invalid scheme regex"));

/// Rewrite relative link and image targets against a base URL.
///
/// A README fetched from the raw-content host references its images relative
/// to the repository root, which would otherwise resolve against the viewing
/// site. Targets that already carry a URL scheme are left untouched.
///
/// `base_url` must end with a trailing slash.
pub fn rewrite_relative_links(markdown: &str, base_url: &str) -> String {
    LINK_TARGET_RE
        .replace_all(markdown, |caps: &Captures| {
            let target = &caps[1];
            if SCHEME_RE.is_match(target) {
                caps[0].to_string()
            } else {
                format!("]({}{})", base_url, target)
            }
        })
        .into_owned()
}
