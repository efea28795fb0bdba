//! Catalog validation command.

use std::path::Path;

use anyhow::Result;

use vitrine_catalog::Catalog;

use crate::config::load_config;

/// Run the check command.
///
/// Loads the config, builds the catalog, and reports what each project's
/// detail page will be able to show. Validation failures propagate as errors.
pub fn run(config_path: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;

    let catalog = Catalog::new(file_config.projects)?;

    for record in catalog.records() {
        let source = if record.inline_content.is_some() {
            "inline content"
        } else if record.repository.is_some() {
            "repository README"
        } else {
            "none (detail page will show 'not found')"
        };

        tracing::info!(
            slug = record.slug.as_deref().unwrap_or(""),
            source,
            "{}",
            record.title
        );
    }

    tracing::info!(
        "Catalog OK: {} projects, contact form {}",
        catalog.len(),
        if file_config.mail.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}
