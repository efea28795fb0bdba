//! Remote README resolution for vitrine project detail pages.
//!
//! Given a project record, this crate produces renderable HTML: inline
//! markdown is rendered directly, otherwise the project's repository README
//! is fetched from the raw-content host, trying `main` then `master`, with
//! relative links rewritten to absolute raw-host URLs before rendering.

pub mod render;
pub mod resolver;
pub mod rewrite;
pub mod view;

pub use render::render_markdown;
pub use resolver::{ReadmeResolver, ResolvedContent, DEFAULT_RAW_HOST};
pub use rewrite::rewrite_relative_links;
pub use view::{DetailSnapshot, DetailView};
