//! Configuration file loading (portfolio.toml).

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use vitrine_catalog::{ProjectRecord, SiteProfile};
use vitrine_mail::MailConfig;

/// Configuration file structure (portfolio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub profile: SiteProfile,

    #[serde(default)]
    pub server: ServerSection,

    /// Send API identifiers. Absent means the contact form is disabled.
    #[serde(default)]
    pub mail: Option<MailConfig>,

    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    4173
}
fn default_assets_dir() -> String {
    "assets".to_string()
}

/// Load and parse the configuration file.
///
/// Mail credentials are secrets, so the `VITRINE_MAIL_SERVICE_ID`,
/// `VITRINE_MAIL_TEMPLATE_ID`, and `VITRINE_MAIL_USER_ID` environment
/// variables take precedence over the file; if all three are set they enable
/// the contact form even without a `[mail]` section.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read {}. Run 'vitrine init' to create one.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    apply_mail_env(&mut config);

    tracing::debug!(
        projects = config.projects.len(),
        mail = config.mail.is_some(),
        "Loaded config"
    );

    Ok(config)
}

/// Overlay mail credentials from the environment.
fn apply_mail_env(config: &mut ConfigFile) {
    let service_id = env::var("VITRINE_MAIL_SERVICE_ID").ok();
    let template_id = env::var("VITRINE_MAIL_TEMPLATE_ID").ok();
    let user_id = env::var("VITRINE_MAIL_USER_ID").ok();

    match &mut config.mail {
        Some(mail) => {
            if let Some(v) = service_id {
                mail.service_id = v;
            }
            if let Some(v) = template_id {
                mail.template_id = v;
            }
            if let Some(v) = user_id {
                mail.user_id = v;
            }
        }
        None => {
            if let (Some(service_id), Some(template_id), Some(user_id)) =
                (service_id, template_id, user_id)
            {
                config.mail = Some(MailConfig {
                    service_id,
                    template_id,
                    user_id,
                    endpoint: None,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(
            r#"
            [site]
            title = "Jane Doe - Portfolio"

            [profile]
            name = "Jane Doe"
            tagline = "Researcher"

            [server]
            port = 8080

            [mail]
            service_id = "s"
            template_id = "t"
            user_id = "u"

            [[projects]]
            title = "Demo"
            description = "A demo"
            repository = "https://github.com/acme/demo"
            "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.title, "Jane Doe - Portfolio");
        assert_eq!(config.profile.name, "Jane Doe");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.mail.is_some());
        assert_eq!(config.projects.len(), 1);
    }

    #[test]
    fn defaults_apply_to_minimal_config() {
        let file = write_config(
            r##"
            [[projects]]
            title = "Only Project"
            description = "d"
            inline_content = "# Hi"
            "##,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.server.port, 4173);
        assert_eq!(config.server.assets_dir, "assets");
        assert!(config.mail.is_none());
    }

    #[test]
    fn missing_file_is_a_helpful_error() {
        let err = load_config(Path::new("/nonexistent/portfolio.toml")).unwrap_err();

        assert!(err.to_string().contains("vitrine init"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = write_config("[[projects]\ntitle = ");

        assert!(load_config(file.path()).is_err());
    }
}
