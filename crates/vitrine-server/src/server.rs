//! Site server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tower_http::services::ServeDir;

use vitrine_catalog::{Catalog, SiteProfile};
use vitrine_mail::{ContactForm, ContactMessage, SubmissionStatus};
use vitrine_readme::ReadmeResolver;

use crate::templates::{Banner, DetailContext, HomeContext, ProjectCard, TemplateEngine};

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory served under `/assets`
    pub assets_dir: PathBuf,

    /// Site title used in page `<title>` tags
    pub site_title: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4173,
            assets_dir: PathBuf::from("assets"),
            site_title: "Portfolio".to_string(),
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Shared server state.
struct AppState {
    config: SiteServerConfig,
    catalog: Catalog,
    profile: SiteProfile,
    resolver: ReadmeResolver,
    contact: Option<ContactForm>,
    templates: TemplateEngine,
}

/// The portfolio site server.
pub struct SiteServer {
    config: SiteServerConfig,
    catalog: Catalog,
    profile: SiteProfile,
    resolver: ReadmeResolver,
    contact: Option<ContactForm>,
}

impl SiteServer {
    /// Create a new site server.
    ///
    /// `contact` is `None` when no mail credentials are configured; the home
    /// page then renders the form disabled.
    pub fn new(
        config: SiteServerConfig,
        catalog: Catalog,
        profile: SiteProfile,
        resolver: ReadmeResolver,
        contact: Option<ContactForm>,
    ) -> Self {
        Self {
            config,
            catalog,
            profile,
            resolver,
            contact,
        }
    }

    /// Build the router. Exposed for tests.
    pub fn router(self) -> Router {
        let assets_dir = self.config.assets_dir.clone();

        let state = Arc::new(AppState {
            config: self.config,
            catalog: self.catalog,
            profile: self.profile,
            resolver: self.resolver,
            contact: self.contact,
            templates: TemplateEngine::new(),
        });

        Router::new()
            .route("/", get(home_handler))
            .route("/projects/{slug}", get(project_handler))
            .route("/contact", post(contact_handler))
            .nest_service("/assets", ServeDir::new(assets_dir))
            .with_state(state)
    }

    /// Start the site server.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress(raw_addr, e.to_string()))?;

        let open = self.config.open;
        let app = self.router();

        tracing::info!("Serving portfolio at http://{}", addr);

        if open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct HomeQuery {
    /// Contact submission outcome carried across the redirect
    sent: Option<String>,
}

/// Handler for the home page.
async fn home_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
) -> Response {
    let ctx = HomeContext {
        site_title: state.config.site_title.clone(),
        profile: state.profile.clone(),
        projects: state.catalog.records().iter().map(ProjectCard::from).collect(),
        banner: query.sent.as_deref().map(banner_for),
        contact_enabled: state.contact.is_some(),
    };

    render(state.templates.render_home(&ctx))
}

/// Handler for a project detail page.
///
/// An unknown slug redirects home rather than rendering an error page: the
/// only way to get here without a valid selection is a stale or hand-typed
/// deep link.
async fn project_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    let Some(record) = state.catalog.get(&slug) else {
        tracing::debug!(slug = %slug, "Unknown project slug; redirecting home");
        return Redirect::to("/").into_response();
    };

    // Resolved fresh on every view; nothing is cached across selections.
    let content = state.resolver.resolve(record).await;

    let ctx = DetailContext {
        site_title: state.config.site_title.clone(),
        project: ProjectCard::from(record),
        content_html: content.html().map(str::to_string),
    };

    render(state.templates.render_detail(&ctx))
}

#[derive(Debug, Deserialize)]
struct ContactFields {
    name: String,
    email: String,
    message: String,
}

/// Handler for contact form submissions.
async fn contact_handler(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<ContactFields>,
) -> Redirect {
    let Some(contact) = &state.contact else {
        return Redirect::to("/?sent=off#contact");
    };

    let message = ContactMessage {
        from_name: fields.name,
        reply_to: fields.email,
        message: fields.message,
    };

    match contact.submit(message).await {
        SubmissionStatus::Success => Redirect::to("/?sent=ok#contact"),
        SubmissionStatus::Submitting => Redirect::to("/?sent=busy#contact"),
        SubmissionStatus::Error | SubmissionStatus::Idle => Redirect::to("/?sent=err#contact"),
    }
}

/// Map a `sent` query value to its banner.
fn banner_for(sent: &str) -> Banner {
    match sent {
        "ok" => Banner {
            kind: "success".to_string(),
            message: "Message sent! I'll get back to you soon.".to_string(),
        },
        "busy" => Banner {
            kind: "error".to_string(),
            message: "A submission is already in flight. Please wait a moment.".to_string(),
        },
        "off" => Banner {
            kind: "error".to_string(),
            message: "The contact form is not configured.".to_string(),
        },
        _ => Banner {
            kind: "error".to_string(),
            message: "Something went wrong. Please try again.".to_string(),
        },
    }
}

/// Turn a template result into a response.
fn render(result: Result<String, minijinja::Error>) -> Response {
    match result {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}
