//! Project record definition.

use serde::Deserialize;

/// One showcased project, as declared in `portfolio.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectRecord {
    /// Stable identifier used in URLs. Derived from the title when omitted.
    #[serde(default)]
    pub slug: Option<String>,

    /// Display name (required, non-empty)
    pub title: String,

    /// Human-readable summary
    pub description: String,

    /// Technology tags, in display order. Duplicates are allowed.
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Preview image path, relative to the assets directory or absolute
    #[serde(default)]
    pub image: Option<String>,

    /// External repository address (`https://github.com/<owner>/<repo>`)
    #[serde(default)]
    pub repository: Option<String>,

    /// Long-form markdown known at build time. When present, the detail
    /// resolver uses it and never touches the network.
    #[serde(default)]
    pub inline_content: Option<String>,
}

impl ProjectRecord {
    /// The identifier this record is addressed by.
    ///
    /// Falls back to a slug derived from the title; [`Catalog::new`] fills
    /// the field in during validation so lookups never recompute it.
    ///
    /// [`Catalog::new`]: crate::Catalog::new
    pub fn slug(&self) -> String {
        self.slug.clone().unwrap_or_else(|| slugify(&self.title))
    }

    /// Whether the record carries any content source at all.
    pub fn has_content_source(&self) -> bool {
        self.inline_content.is_some() || self.repository.is_some()
    }
}

/// Convert a title to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("QGNN-CoPE: Quantum Graph Neural Networks"), "qgnn-cope-quantum-graph-neural-networks");
        assert_eq!(slugify("Monte Carlo (CUDA)"), "monte-carlo-cuda");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn explicit_slug_wins() {
        let record = ProjectRecord {
            slug: Some("demo".to_string()),
            title: "Something Else".to_string(),
            description: String::new(),
            technologies: vec![],
            image: None,
            repository: None,
            inline_content: None,
        };

        assert_eq!(record.slug(), "demo");
    }

    #[test]
    fn detects_content_sources() {
        let mut record = ProjectRecord {
            slug: None,
            title: "Demo".to_string(),
            description: String::new(),
            technologies: vec![],
            image: None,
            repository: None,
            inline_content: None,
        };
        assert!(!record.has_content_source());

        record.repository = Some("https://github.com/acme/demo".to_string());
        assert!(record.has_content_source());

        record.repository = None;
        record.inline_content = Some("# Demo".to_string());
        assert!(record.has_content_source());
    }
}
