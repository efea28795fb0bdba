//! Validated, ordered collection of project records.

use crate::record::{slugify, ProjectRecord};

/// Errors that can occur when building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Project at position {0} has an empty title")]
    EmptyTitle(usize),

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid repository URL for '{slug}': {url}")]
    InvalidRepositoryUrl { slug: String, url: String },
}

/// The ordered project catalog.
///
/// Construction validates every record and pins each record's slug so that
/// lookups are unambiguous. Display order is declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog from raw records.
    ///
    /// Slugs are filled in from titles where omitted. A record without any
    /// content source is accepted but logged, since its detail view can only
    /// ever show "content not found".
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = Vec::new();
        let mut validated = Vec::with_capacity(records.len());

        for (position, mut record) in records.into_iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(position));
            }

            let slug = record
                .slug
                .clone()
                .unwrap_or_else(|| slugify(&record.title));

            if seen.contains(&slug) {
                return Err(CatalogError::DuplicateSlug(slug));
            }

            if let Some(url) = &record.repository {
                if !url.starts_with("https://github.com/") {
                    return Err(CatalogError::InvalidRepositoryUrl {
                        slug,
                        url: url.clone(),
                    });
                }
            }

            if !record.has_content_source() {
                tracing::warn!(
                    slug = %slug,
                    "Project has neither inline content nor a repository; its detail page will be empty"
                );
            }

            record.slug = Some(slug.clone());
            seen.push(slug);
            validated.push(record);
        }

        Ok(Self { records: validated })
    }

    /// Look up a record by its slug.
    pub fn get(&self, slug: &str) -> Option<&ProjectRecord> {
        self.records
            .iter()
            .find(|r| r.slug.as_deref() == Some(slug))
    }

    /// Records in display order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
