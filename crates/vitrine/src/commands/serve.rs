//! Site server command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use vitrine_catalog::Catalog;
use vitrine_mail::{ContactForm, MailClient};
use vitrine_readme::ReadmeResolver;
use vitrine_server::{SiteServer, SiteServerConfig};

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let file_config = load_config(config_path)?;

    let catalog = Catalog::new(file_config.projects)?;
    tracing::info!("Loaded {} projects", catalog.len());

    let contact = file_config.mail.map(|mail| {
        tracing::info!("Contact form enabled");
        ContactForm::new(MailClient::new(mail))
    });
    if contact.is_none() {
        tracing::warn!("No mail configuration; contact form disabled");
    }

    let config = SiteServerConfig {
        host: file_config.server.host,
        port: port.unwrap_or(file_config.server.port),
        assets_dir: PathBuf::from(file_config.server.assets_dir),
        site_title: file_config.site.title,
        open,
    };

    let server = SiteServer::new(
        config,
        catalog,
        file_config.profile,
        ReadmeResolver::new(),
        contact,
    );

    server.start().await?;

    Ok(())
}
