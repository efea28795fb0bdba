//! Portfolio site server.
//!
//! Serves the home page (hero, about, project grid, contact form), per-project
//! detail pages with resolved README content, and the contact submission
//! endpoint.

pub mod server;
pub mod templates;

pub use server::{ServerError, SiteServer, SiteServerConfig};
pub use templates::TemplateEngine;
